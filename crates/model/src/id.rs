use std::cmp::Ordering;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::version::Version;

/// The combination of properties which makes an extension unique.
///
/// Two ids are equal when their identifier strings are equal and their
/// versions are equal, with an absent version matching only an absent
/// version. Ordering is by identifier first and version second, so a sorted
/// listing groups every version of an extension together.
///
/// The identifier itself is not validated here; an empty id is representable
/// and it is up to callers (the remote adapter in particular) to decide
/// whether to accept one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionId {
    pub id: String,
    pub version: Option<Version>,
}

impl ExtensionId {
    /// An id with no version, matching any-version lookups.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    /// An id with a version parsed leniently from a string.
    pub fn of(id: impl Into<String>, version: &str) -> Self {
        Self {
            id: id.into(),
            version: Some(Version::new(version)),
        }
    }

    pub fn with_version(id: impl Into<String>, version: Version) -> Self {
        Self {
            id: id.into(),
            version: Some(version),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    /// Compare against a possibly-absent id. Any id sorts strictly before
    /// "nothing", so `None` always yields [`Ordering::Less`].
    pub fn compare_opt(&self, other: Option<&ExtensionId>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => Ordering::Less,
        }
    }
}

impl Ord for ExtensionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl PartialOrd for ExtensionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ExtensionId {
    /// Renders as `<id>-<version>`. A versionless id renders the version
    /// slot as the literal text `null` ("myext-null"); downstream consumers
    /// match on that exact string, so it is kept as-is.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}-{}", self.id, version),
            None => write!(f, "{}-null", self.id),
        }
    }
}
