use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An extension license: a display name plus the license text as lines.
///
/// The content may be empty, either because the repository record carried no
/// text or because the license is only known by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionLicense {
    pub name: String,
    pub content: Vec<String>,
}

impl ExtensionLicense {
    pub fn new(name: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Build a license by splitting a raw text blob into lines. Empty text
    /// yields an empty line sequence.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            content: text.lines().map(str::to_owned).collect(),
        }
    }
}

/// Lookup of canonical, previously registered license definitions by name.
///
/// A resolver hit takes precedence over whatever license text a remote record
/// carries, so well-known licenses stay canonical across repositories.
pub trait LicenseResolver {
    fn resolve(&self, name: &str) -> Option<ExtensionLicense>;
}

/// In-memory [`LicenseResolver`] backed by a name-keyed map.
#[derive(Debug, Clone, Default)]
pub struct MemoryLicenseResolver {
    licenses: HashMap<String, ExtensionLicense>,
}

impl MemoryLicenseResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canonical license. A later registration under the same
    /// name replaces the earlier one.
    pub fn register(&mut self, license: ExtensionLicense) {
        self.licenses.insert(license.name.clone(), license);
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

impl LicenseResolver for MemoryLicenseResolver {
    fn resolve(&self, name: &str) -> Option<ExtensionLicense> {
        self.licenses.get(name).cloned()
    }
}
