//! Cask Remote - Adapter from repository wire records to the domain model
//!
//! A repository endpoint hands back loosely validated records
//! ([`RemoteExtension`] and friends); this crate translates them into
//! [`cask_model::Extension`] values with a per-field fail-soft policy:
//! malformed sub-fields degrade in place (an author keeps its name when the
//! url is broken, a repository entry with an unparsable uri is dropped while
//! its siblings survive) and never abort the rest of the record. The single
//! hard failure is a record without a usable id.
//!
//! ```rust
//! use cask_model::{MemoryLicenseResolver, RepositoryDescriptor};
//! use cask_remote::{adapt, RemoteExtension};
//! use url::Url;
//!
//! let owner = RepositoryDescriptor::new(
//!     "central",
//!     "cask",
//!     Url::parse("https://extensions.example.org/api").unwrap(),
//! );
//!
//! let record = RemoteExtension {
//!     id: Some("org.example.vault".to_string()),
//!     version: Some("1.0".to_string()),
//!     ..RemoteExtension::default()
//! };
//!
//! let extension = adapt(record, &MemoryLicenseResolver::new(), &owner).unwrap();
//! assert_eq!(extension.identity().to_string(), "org.example.vault-1.0");
//! ```

pub mod adapter;
pub mod error;
pub mod record;

pub use adapter::adapt;
pub use error::{AdapterError, Result};
pub use record::{
    RemoteAuthor, RemoteDependency, RemoteExtension, RemoteIssueManagement, RemoteLicense,
    RemoteProperty, RemoteRating, RemoteRepository, RemoteScm, RemoteScmConnection,
};
