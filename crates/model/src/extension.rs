use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::ExtensionId;
use crate::license::ExtensionLicense;
use crate::meta::{
    ExtensionAuthor, ExtensionDependency, ExtensionFile, ExtensionIssueManagement, ExtensionRating,
    ExtensionScm, RepositoryDescriptor,
};

/// A named, versioned installable unit with its repository metadata.
///
/// An `Extension` is assembled once, through [`ExtensionBuilder`], and is
/// read-only afterwards. Optional metadata stays optional all the way
/// through; an absent block is `None`, never a placeholder value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extension {
    identity: ExtensionId,
    kind: Option<String>,
    name: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    website: Option<String>,
    features: Vec<String>,
    rating: Option<ExtensionRating>,
    authors: Vec<ExtensionAuthor>,
    licenses: Vec<ExtensionLicense>,
    scm: Option<ExtensionScm>,
    issue_management: Option<ExtensionIssueManagement>,
    category: Option<String>,
    properties: HashMap<String, String>,
    repositories: Vec<RepositoryDescriptor>,
    dependencies: Vec<ExtensionDependency>,
    file: ExtensionFile,
}

impl Extension {
    /// Start building an extension owned by the given repository. The
    /// repository descriptor is what rating and file references are tied to.
    pub fn builder(identity: ExtensionId, owner: RepositoryDescriptor) -> ExtensionBuilder {
        ExtensionBuilder {
            identity,
            owner,
            kind: None,
            name: None,
            summary: None,
            description: None,
            website: None,
            features: Vec::new(),
            rating: None,
            authors: Vec::new(),
            licenses: Vec::new(),
            scm: None,
            issue_management: None,
            category: None,
            properties: HashMap::new(),
            repositories: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn identity(&self) -> &ExtensionId {
        &self.identity
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn rating(&self) -> Option<&ExtensionRating> {
        self.rating.as_ref()
    }

    pub fn authors(&self) -> &[ExtensionAuthor] {
        &self.authors
    }

    pub fn licenses(&self) -> &[ExtensionLicense] {
        &self.licenses
    }

    pub fn scm(&self) -> Option<&ExtensionScm> {
        self.scm.as_ref()
    }

    pub fn issue_management(&self) -> Option<&ExtensionIssueManagement> {
        self.issue_management.as_ref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn repositories(&self) -> &[RepositoryDescriptor] {
        &self.repositories
    }

    pub fn dependencies(&self) -> &[ExtensionDependency] {
        &self.dependencies
    }

    pub fn file(&self) -> &ExtensionFile {
        &self.file
    }
}

/// Accumulates extension fields and yields one immutable [`Extension`].
///
/// Sequence setters (`author`, `license`, `repository`, `dependency`,
/// `feature`) append and preserve call order; `property` is last-write-wins
/// on duplicate keys. Optional scalar setters take `Option` so callers can
/// pass through possibly-absent source fields directly.
#[derive(Debug)]
pub struct ExtensionBuilder {
    identity: ExtensionId,
    owner: RepositoryDescriptor,
    kind: Option<String>,
    name: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    website: Option<String>,
    features: Vec<String>,
    rating: Option<ExtensionRating>,
    authors: Vec<ExtensionAuthor>,
    licenses: Vec<ExtensionLicense>,
    scm: Option<ExtensionScm>,
    issue_management: Option<ExtensionIssueManagement>,
    category: Option<String>,
    properties: HashMap<String, String>,
    repositories: Vec<RepositoryDescriptor>,
    dependencies: Vec<ExtensionDependency>,
}

impl ExtensionBuilder {
    pub fn kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn website(mut self, website: Option<String>) -> Self {
        self.website = website;
        self
    }

    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Attach a rating, tying it to the owning repository.
    pub fn rating(mut self, total_votes: u32, average_vote: f32) -> Self {
        self.rating = Some(ExtensionRating {
            total_votes,
            average_vote,
            repository: self.owner.clone(),
        });
        self
    }

    pub fn author(mut self, author: ExtensionAuthor) -> Self {
        self.authors.push(author);
        self
    }

    pub fn license(mut self, license: ExtensionLicense) -> Self {
        self.licenses.push(license);
        self
    }

    pub fn scm(mut self, scm: ExtensionScm) -> Self {
        self.scm = Some(scm);
        self
    }

    pub fn issue_management(mut self, issue_management: ExtensionIssueManagement) -> Self {
        self.issue_management = Some(issue_management);
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Record a property. A later value under the same key replaces the
    /// earlier one.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn repository(mut self, repository: RepositoryDescriptor) -> Self {
        self.repositories.push(repository);
        self
    }

    pub fn dependency(mut self, dependency: ExtensionDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Finish the extension. The file reference is always derived from the
    /// owning repository and the identity, so it is present on every built
    /// extension.
    pub fn build(self) -> Extension {
        let file = ExtensionFile::new(self.owner, self.identity.clone());

        Extension {
            identity: self.identity,
            kind: self.kind,
            name: self.name,
            summary: self.summary,
            description: self.description,
            website: self.website,
            features: self.features,
            rating: self.rating,
            authors: self.authors,
            licenses: self.licenses,
            scm: self.scm,
            issue_management: self.issue_management,
            category: self.category,
            properties: self.properties,
            repositories: self.repositories,
            dependencies: self.dependencies,
            file,
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn owner() -> RepositoryDescriptor {
        RepositoryDescriptor::new(
            "central",
            "cask",
            Url::parse("https://extensions.example.org/api").unwrap(),
        )
    }

    #[test]
    fn test_minimal_build_always_has_a_file_reference() {
        let extension =
            Extension::builder(ExtensionId::of("org.example.vault", "1.0"), owner()).build();

        assert_eq!(extension.identity().to_string(), "org.example.vault-1.0");
        assert_eq!(extension.file().repository, owner());
        assert_eq!(extension.file().id, *extension.identity());
        assert!(extension.name().is_none());
        assert!(extension.features().is_empty());
        assert!(extension.rating().is_none());
    }

    #[test]
    fn test_rating_is_tied_to_the_owning_repository() {
        let extension = Extension::builder(ExtensionId::of("org.example.vault", "1.0"), owner())
            .rating(42, 4.5)
            .build();

        let rating = extension.rating().unwrap();
        assert_eq!(rating.total_votes, 42);
        assert_eq!(rating.average_vote, 4.5);
        assert_eq!(rating.repository, owner());
    }

    #[test]
    fn test_property_last_write_wins() {
        let extension = Extension::builder(ExtensionId::of("org.example.vault", "1.0"), owner())
            .property("k", "1")
            .property("other", "x")
            .property("k", "2")
            .build();

        assert_eq!(extension.property("k"), Some("2"));
        assert_eq!(extension.property("other"), Some("x"));
        assert_eq!(extension.properties().len(), 2);
    }

    #[test]
    fn test_sequences_preserve_insertion_order() {
        let extension = Extension::builder(ExtensionId::of("org.example.vault", "1.0"), owner())
            .author(ExtensionAuthor::new("Ann", None))
            .author(ExtensionAuthor::new("Ben", None))
            .feature("org.example.vault-legacy")
            .feature("org.example.safe")
            .build();

        let names: Vec<_> = extension.authors().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Ben"]);
        assert_eq!(
            extension.features(),
            ["org.example.vault-legacy", "org.example.safe"]
        );
    }
}
