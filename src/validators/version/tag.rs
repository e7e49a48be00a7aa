//! Version tag validators.
//!
//! A version tag is either a simple token (1–128 characters of letters,
//! digits, `.`, `_`, `-`) or a strict semantic version. A few tag values are
//! reserved and rejected regardless of format.

use crate::core::{ValidationComplexity, ValidationError, Validator, ValidatorMetadata};

use super::Semver;

/// Maximum length of a simple version token.
pub const TAG_TOKEN_MAX_LENGTH: usize = 128;

/// Tag values that are rejected regardless of format (case-insensitive).
pub const RESERVED_TAGS: &[&str] = &["latest"];

// ============================================================================
// TOKEN VALIDATOR
// ============================================================================

/// Validates simple version tokens.
///
/// A token is 1–128 characters drawn from letters, digits, `.`, `_`, `-`.
///
/// # Examples
///
/// ```
/// use tag_validator::core::Validator;
/// use tag_validator::validators::version::TagToken;
///
/// let validator = TagToken::new();
///
/// assert!(validator.validate("my_version-1").is_ok());
/// assert!(validator.validate("").is_err());
/// assert!(validator.validate("no spaces").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TagToken;

impl TagToken {
    /// Creates a new token validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_token_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'
    }
}

impl Validator for TagToken {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "tag_token_empty",
                "version token cannot be empty",
            ));
        }

        if input.len() > TAG_TOKEN_MAX_LENGTH {
            return Err(ValidationError::new(
                "tag_token_too_long",
                format!("version token must be at most {TAG_TOKEN_MAX_LENGTH} characters"),
            )
            .with_param("max_length", TAG_TOKEN_MAX_LENGTH));
        }

        if let Some(c) = input.chars().find(|&c| !Self::is_token_char(c)) {
            return Err(ValidationError::new(
                "tag_token_invalid_char",
                format!(
                    "version token contains invalid character '{c}'; only letters, digits, '.', '_' and '-' are allowed"
                ),
            ));
        }

        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::builder()
            .name("TagToken")
            .description(format!(
                "simple version token, 1-{TAG_TOKEN_MAX_LENGTH} characters of [A-Za-z0-9._-]"
            ))
            .complexity(ValidationComplexity::Linear)
            .cacheable(true)
            .tag("version")
            .build()
    }
}

// ============================================================================
// VERSION TAG VALIDATOR
// ============================================================================

/// Validates version tags.
///
/// A tag passes when it is either a simple token or a valid semantic
/// version. Strings shaped like a release version (an all-digit
/// `MAJOR.MINOR.PATCH` core, optionally followed by `-`/`+` suffixes) are
/// held to the strict semver rules, so `01.0.0` is rejected for its leading
/// zero instead of slipping through as a token.
///
/// Reserved values (`latest` by default, compared case-insensitively) are
/// rejected with a distinct error after the format check, whichever format
/// branch matched.
///
/// # Examples
///
/// ```
/// use tag_validator::core::Validator;
/// use tag_validator::validators::version::VersionTag;
///
/// let validator = VersionTag::new();
///
/// assert!(validator.validate("1.0.0").is_ok());
/// assert!(validator.validate("1.2.3-alpha.1+build.5").is_ok());
/// assert!(validator.validate("my_version-1").is_ok());
///
/// assert!(validator.validate("01.0.0").is_err()); // leading zero
/// assert!(validator.validate("latest").is_err()); // reserved
/// assert!(validator.validate("LATEST").is_err()); // reserved, any case
/// ```
#[derive(Debug, Clone)]
pub struct VersionTag {
    token: TagToken,
    semver: Semver,
    reserved: Vec<String>,
}

impl VersionTag {
    /// Creates a new version tag validator with the default reserved set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: TagToken::new(),
            semver: Semver::new(),
            reserved: RESERVED_TAGS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Adds a reserved tag value (compared case-insensitively).
    #[must_use = "builder methods must be chained or built"]
    pub fn reserve(mut self, tag: impl Into<String>) -> Self {
        self.reserved.push(tag.into().to_ascii_lowercase());
        self
    }

    fn check_format(&self, input: &str) -> Result<(), ValidationError> {
        let inner = if Semver::is_shaped(input) {
            match self.semver.validate(input) {
                Ok(()) => return Ok(()),
                Err(err) => err,
            }
        } else {
            match self.token.validate(input) {
                Ok(()) => return Ok(()),
                Err(err) => err,
            }
        };

        Err(ValidationError::new(
            "invalid_version_tag",
            format!(
                "invalid version \"{input}\": must be either a simple token of at most \
                 {TAG_TOKEN_MAX_LENGTH} letters, digits, '.', '_' or '-', or a valid \
                 semantic version"
            ),
        )
        .with_param("value", input)
        .with_nested(vec![inner]))
    }

    fn check_reserved(&self, input: &str) -> Result<(), ValidationError> {
        let lowered = input.to_ascii_lowercase();
        if self.reserved.iter().any(|r| r == &lowered) {
            return Err(ValidationError::new(
                "reserved_version_tag",
                format!("version cannot be set to \"{input}\": it is a reserved tag"),
            )
            .with_param("value", input));
        }
        Ok(())
    }
}

impl Default for VersionTag {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for VersionTag {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.check_format(input)?;
        // Applied independently of which format branch matched.
        self.check_reserved(input)?;
        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::builder()
            .name("VersionTag")
            .description("simple token or SemVer 2.0.0 version, reserved tags rejected")
            .complexity(ValidationComplexity::Linear)
            .cacheable(true)
            .tag("version")
            .build()
    }
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Creates a simple token validator.
#[must_use]
pub fn tag_token() -> TagToken {
    TagToken::new()
}

/// Creates a version tag validator.
#[must_use]
pub fn version_tag() -> VersionTag {
    VersionTag::new()
}

/// Checks that a string is a valid, non-reserved version tag.
///
/// One-shot form of [`VersionTag`] for callers that validate a single value
/// and propagate the error with `?`.
pub fn check_version_tag(value: &str) -> Result<(), ValidationError> {
    VersionTag::new().validate(value)
}

// ============================================================================
// TESTS
// ============================================================================
