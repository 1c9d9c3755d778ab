use serde::{Deserialize, Serialize};
use url::Url;

use crate::id::ExtensionId;

/// An author entry attached to an extension.
///
/// The url is optional: remote records routinely carry malformed or missing
/// author links and the name is still worth keeping on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionAuthor {
    pub name: String,
    pub url: Option<Url>,
}

impl ExtensionAuthor {
    pub fn new(name: impl Into<String>, url: Option<Url>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }
}

/// A source-control connection in `{system, path}` form, e.g.
/// `{git, https://example.org/repo.git}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionScmConnection {
    pub system: String,
    pub path: String,
}

/// Source-control coordinates of an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionScm {
    pub url: Option<String>,
    pub connection: Option<ExtensionScmConnection>,
    pub developer_connection: Option<ExtensionScmConnection>,
}

/// Issue tracker coordinates of an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionIssueManagement {
    pub system: Option<String>,
    pub url: Option<String>,
}

/// Aggregated user rating, tied back to the repository that computed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionRating {
    pub total_votes: u32,
    pub average_vote: f32,
    pub repository: RepositoryDescriptor,
}

/// Identifies a source of extensions: a stable id, a repository kind
/// ("maven", "cask", ...) and the endpoint uri.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    pub id: String,
    pub kind: String,
    pub uri: Url,
}

impl RepositoryDescriptor {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, uri: Url) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            uri,
        }
    }
}

/// Supplies the owning repository used when assembling rating and file
/// references for extensions served by that repository.
pub trait RepositoryContext {
    fn descriptor(&self) -> &RepositoryDescriptor;
}

impl RepositoryContext for RepositoryDescriptor {
    fn descriptor(&self) -> &RepositoryDescriptor {
        self
    }
}

/// A dependency on another extension. The constraint is an uninterpreted
/// version-range string; resolution happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionDependency {
    pub id: String,
    pub constraint: String,
    pub optional: bool,
}

/// Locates the downloadable artifact of an extension: which repository
/// serves it, and under which identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionFile {
    pub repository: RepositoryDescriptor,
    pub id: ExtensionId,
}

impl ExtensionFile {
    pub fn new(repository: RepositoryDescriptor, id: ExtensionId) -> Self {
        Self { repository, id }
    }
}
