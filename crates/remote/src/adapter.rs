//! Fail-soft translation of remote records into domain extensions.
//!
//! Repository payloads are network-sourced and only loosely validated, so a
//! single malformed sub-field must not cost us the whole record. Every
//! conversion in this module degrades locally: a bad author url becomes an
//! author without a url, a repository entry with an unparsable uri is
//! dropped while its siblings survive, a license without a name is skipped.
//! The only total failure is a record with no usable id.

use cask_model::{
    Extension, ExtensionAuthor, ExtensionDependency, ExtensionId, ExtensionIssueManagement,
    ExtensionLicense, ExtensionScm, ExtensionScmConnection, LicenseResolver, RepositoryContext,
    RepositoryDescriptor,
};
use url::Url;

use crate::error::{AdapterError, Result};
use crate::record::{
    RemoteAuthor, RemoteDependency, RemoteExtension, RemoteLicense, RemoteRepository,
    RemoteScmConnection,
};

/// Translate one remote record into a domain [`Extension`].
///
/// `licenses` maps license names to canonical definitions; a hit there wins
/// over the license text carried in the record. `context` supplies the
/// owning repository, which rating and file references are tied to.
///
/// Fails only with [`AdapterError::MissingId`] when the record carries no
/// id or an empty one. Everything else follows the per-field fail-soft
/// policy described on each helper below; callers always get a complete
/// `Extension`, never a partial-failure signal.
pub fn adapt(
    record: RemoteExtension,
    licenses: &dyn LicenseResolver,
    context: &dyn RepositoryContext,
) -> Result<Extension> {
    let id = match record.id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(AdapterError::MissingId),
    };

    let identity = match record.version.as_deref() {
        Some(version) => ExtensionId::of(id, version),
        None => ExtensionId::new(id),
    };

    let mut builder = Extension::builder(identity, context.descriptor().clone())
        .kind(record.kind)
        .name(record.name)
        .summary(record.summary)
        .description(record.description)
        .website(record.website)
        .features(record.features)
        .category(record.category);

    if let Some(rating) = record.rating {
        builder = builder.rating(
            rating.total_votes.unwrap_or_default(),
            rating.average_vote.unwrap_or_default(),
        );
    }

    for author in record.authors {
        builder = builder.author(adapt_author(author));
    }

    for license in record.licenses {
        if let Some(license) = adapt_license(license, licenses) {
            builder = builder.license(license);
        }
    }

    if let Some(scm) = record.scm {
        builder = builder.scm(ExtensionScm {
            url: scm.url,
            connection: scm.connection.map(adapt_scm_connection),
            developer_connection: scm.developer_connection.map(adapt_scm_connection),
        });
    }

    if let Some(issues) = record.issue_management {
        builder = builder.issue_management(ExtensionIssueManagement {
            system: issues.system,
            url: issues.url,
        });
    }

    for property in record.properties {
        if let Some(key) = property.key {
            builder = builder.property(key, property.value.unwrap_or_default());
        }
    }

    for repository in record.repositories {
        if let Some(descriptor) = adapt_repository(repository) {
            builder = builder.repository(descriptor);
        }
    }

    for dependency in record.dependencies {
        if let Some(dependency) = adapt_dependency(dependency) {
            builder = builder.dependency(dependency);
        }
    }

    Ok(builder.build())
}

/// An author keeps its name even when the url is missing or malformed; the
/// url just degrades to `None`.
fn adapt_author(author: RemoteAuthor) -> ExtensionAuthor {
    let url = author.url.as_deref().and_then(|raw| match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::debug!("Discarding malformed author url '{raw}': {err}");
            None
        }
    });

    ExtensionAuthor::new(author.name.unwrap_or_default(), url)
}

/// A license without a name is unusable and is skipped. Named licenses
/// resolve to their canonical definition when the resolver knows them,
/// otherwise they are synthesized from the record's own content text
/// (absent content yields an empty line sequence, not a dropped license).
fn adapt_license(
    license: RemoteLicense,
    resolver: &dyn LicenseResolver,
) -> Option<ExtensionLicense> {
    let Some(name) = license.name else {
        tracing::debug!("Skipping license entry without a name");
        return None;
    };

    match resolver.resolve(&name) {
        Some(known) => Some(known),
        None => Some(ExtensionLicense::from_text(
            name,
            license.content.as_deref().unwrap_or(""),
        )),
    }
}

fn adapt_scm_connection(connection: RemoteScmConnection) -> ExtensionScmConnection {
    ExtensionScmConnection {
        system: connection.system.unwrap_or_default(),
        path: connection.path.unwrap_or_default(),
    }
}

/// A repository entry must carry a parsable uri to be usable at all; one
/// that does not is dropped, leaving the remaining entries untouched.
fn adapt_repository(repository: RemoteRepository) -> Option<RepositoryDescriptor> {
    let raw = repository.uri.unwrap_or_default();

    match Url::parse(&raw) {
        Ok(uri) => Some(RepositoryDescriptor::new(
            repository.id.unwrap_or_default(),
            repository.kind.unwrap_or_default(),
            uri,
        )),
        Err(err) => {
            tracing::warn!(
                "Dropping repository '{}' with unparsable uri '{raw}': {err}",
                repository.id.as_deref().unwrap_or("<unnamed>"),
            );
            None
        }
    }
}

/// A dependency without an id cannot take part in resolution and is
/// dropped. The constraint string stays uninterpreted here.
fn adapt_dependency(dependency: RemoteDependency) -> Option<ExtensionDependency> {
    let Some(id) = dependency.id else {
        tracing::warn!("Dropping dependency entry without an id");
        return None;
    };

    Some(ExtensionDependency {
        id,
        constraint: dependency.constraint.unwrap_or_default(),
        optional: dependency.optional.unwrap_or(false),
    })
}
