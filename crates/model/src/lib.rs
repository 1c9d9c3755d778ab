//! Cask Model - Domain model for extensions and their identity
//!
//! This crate defines what an extension *is* once it has been pulled out of
//! a repository's wire format: the `(id, version)` identity with its
//! equality and ordering semantics, the lenient [`Version`] type, and the
//! immutable [`Extension`] value with its metadata (authors, licenses, scm,
//! dependencies, repositories, ratings).
//!
//! It also defines the collaborator seams the translation layer needs:
//! [`LicenseResolver`] for canonical license lookup and [`RepositoryContext`]
//! for the owning repository of a record.
//!
//! Extensions are built once, through [`Extension::builder`], and are
//! read-only afterwards:
//!
//! ```rust
//! use cask_model::{Extension, ExtensionId, RepositoryDescriptor};
//! use url::Url;
//!
//! let owner = RepositoryDescriptor::new(
//!     "central",
//!     "cask",
//!     Url::parse("https://extensions.example.org/api").unwrap(),
//! );
//!
//! let extension = Extension::builder(ExtensionId::of("org.example.vault", "1.0"), owner)
//!     .name(Some("Vault".to_string()))
//!     .feature("org.example.safe")
//!     .build();
//!
//! assert_eq!(extension.identity().to_string(), "org.example.vault-1.0");
//! ```

pub mod extension;
pub mod id;
pub mod license;
pub mod meta;
pub mod version;

pub use extension::{Extension, ExtensionBuilder};
pub use id::ExtensionId;
pub use license::{ExtensionLicense, LicenseResolver, MemoryLicenseResolver};
pub use meta::{
    ExtensionAuthor, ExtensionDependency, ExtensionFile, ExtensionIssueManagement, ExtensionRating,
    ExtensionScm, ExtensionScmConnection, RepositoryContext, RepositoryDescriptor,
};
pub use version::Version;
