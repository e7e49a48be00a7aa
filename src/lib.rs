//! Name and version-tag validation for artifact registries.
//!
//! Two families of pure, stateless validators:
//!
//! - [`validators::naming`]: DNS-1123 subdomain and label names per
//!   RFC 1123, the naming rule shared by container and orchestration
//!   systems.
//! - [`validators::version`]: version tags, accepting either a simple
//!   1–128 character token or a strict SemVer 2.0.0 version, with reserved
//!   values such as `latest` rejected outright.
//!
//! Every validator implements the [`Validator`] trait and reports failures
//! as a [`ValidationError`]. Validators can be composed with the
//! [`combinators`] in this crate.
//!
//! # Examples
//!
//! ```rust
//! use tag_validator::{check_dns1123_subdomain, check_version_tag};
//!
//! check_dns1123_subdomain("iris-classifier")?;
//! check_version_tag("1.2.3-alpha.1+build.5")?;
//!
//! assert!(check_dns1123_subdomain("My-Service").is_err());
//! assert!(check_version_tag("latest").is_err());
//! # Ok::<(), tag_validator::ValidationError>(())
//! ```

pub mod combinators;
pub mod core;
pub mod validators;

pub use crate::core::{
    ValidationComplexity, ValidationError, Validator, ValidatorExt, ValidatorMetadata,
};

pub use validators::naming::{Dns1123Label, Dns1123Subdomain, check_dns1123_subdomain};
pub use validators::version::{Semver, TagToken, VersionTag, check_version_tag};

/// Prelude with the trait and all validator factories.
pub mod prelude {
    pub use crate::core::{ValidationError, Validator, ValidatorExt};
    pub use crate::validators::prelude::*;
}
