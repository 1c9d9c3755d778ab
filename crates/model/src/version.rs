use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A repository-supplied version string with lenient ordering.
///
/// Remote repositories report versions in whatever shape their build tooling
/// produced, so construction never fails: any string is accepted and the raw
/// text is kept byte-for-byte for display and equality. Ordering goes through
/// a normalized semver form when one can be derived ("1.0" is read as 1.0.0),
/// and falls back to plain byte order for opaque strings.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    normalized: Option<semver::Version>,
}

impl Version {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// The version string exactly as the repository reported it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this version has a semver interpretation used for ordering.
    pub fn is_semver(&self) -> bool {
        self.normalized.is_some()
    }
}

/// Lenient semver normalization. Accepts full semver as-is and pads short
/// dotted-numeric forms ("1", "1.0", "1.0-rc1") up to three components.
fn normalize(raw: &str) -> Option<semver::Version> {
    if let Ok(version) = semver::Version::parse(raw) {
        return Some(version);
    }

    let split = raw.find(['-', '+']).unwrap_or(raw.len());
    let (core, rest) = raw.split_at(split);

    let dots = core.matches('.').count();
    let numeric = core
        .split('.')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));

    if dots < 2 && numeric {
        let padded = format!("{}{}{}", core, ".0".repeat(2 - dots), rest);
        return semver::Version::parse(&padded).ok();
    }

    None
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.normalized, &other.normalized) {
            // Raw text breaks ties so that Ord stays consistent with Eq.
            (Some(a), Some(b)) => a.cmp(b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Version {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::new(s))
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Version::new(raw)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Version::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_preserves_raw_text() {
        assert_eq!(Version::new("1.0").to_string(), "1.0");
        assert_eq!(Version::new("2.3.4-beta.1").to_string(), "2.3.4-beta.1");
        assert_eq!(Version::new("not-a-version").to_string(), "not-a-version");
    }

    #[test]
    fn test_lenient_normalization() {
        assert!(Version::new("1").is_semver());
        assert!(Version::new("1.0").is_semver());
        assert!(Version::new("1.0-rc1").is_semver());
        assert!(Version::new("1.2.3").is_semver());
        assert!(!Version::new("latest").is_semver());
        assert!(!Version::new("1.0.0.0").is_semver());
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(Version::new("2.0") < Version::new("10.0"));
        assert!(Version::new("1.9.1") < Version::new("1.10.0"));
        assert!(Version::new("1.0-rc1") < Version::new("1.0"));
    }

    #[test]
    fn test_opaque_versions_order_after_semver() {
        assert!(Version::new("9.9.9") < Version::new("experimental"));
        assert!(Version::new("abc") < Version::new("abd"));
    }

    #[test]
    fn test_equality_is_over_raw_text() {
        assert_eq!(Version::new("1.0"), Version::new("1.0"));
        assert_ne!(Version::new("1.0"), Version::new("1.0.0"));
        // Same semver interpretation, but distinct values with a stable order.
        assert!(Version::new("1.0") < Version::new("1.0.0"));
    }
}
