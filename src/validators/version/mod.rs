//! Version validators
//!
//! Validators for version strings: strict semantic versions and the more
//! permissive tag tokens used by artifact registries.

mod semver;
mod tag;

pub use semver::{Semver, semver};
pub use tag::{
    RESERVED_TAGS, TAG_TOKEN_MAX_LENGTH, TagToken, VersionTag, check_version_tag, tag_token,
    version_tag,
};
