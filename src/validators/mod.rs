//! Built-in validators
//!
//! # Categories
//!
//! - **Naming**: RFC 1123 subdomain and label identifiers
//! - **Version**: semantic versions and simple version tokens
//!
//! # Examples
//!
//! ```rust
//! use tag_validator::core::Validator;
//! use tag_validator::validators::prelude::*;
//!
//! let name = dns1123_subdomain();
//! assert!(name.validate("iris-classifier").is_ok());
//!
//! let version = version_tag();
//! assert!(version.validate("1.2.3-alpha.1").is_ok());
//! ```

pub mod naming;
pub mod version;

pub use naming::{Dns1123Label, Dns1123Subdomain};
pub use version::{Semver, TagToken, VersionTag};

/// Prelude with all validator factories.
pub mod prelude {
    pub use super::naming::{check_dns1123_subdomain, dns1123_label, dns1123_subdomain};
    pub use super::version::{check_version_tag, semver, tag_token, version_tag};
}
