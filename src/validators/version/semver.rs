//! Semantic version validator (SemVer 2.0.0).

use crate::core::{ValidationComplexity, ValidationError, Validator, ValidatorMetadata};

// ============================================================================
// SEMVER VALIDATOR
// ============================================================================

/// Validates semantic version strings per SemVer 2.0.0.
///
/// Format: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
///
/// - MAJOR, MINOR, PATCH are non-negative integers with no leading zeros
///   (a component may be exactly `0`)
/// - PRERELEASE is optional: dot-separated alphanumeric/hyphen identifiers,
///   numeric identifiers without leading zeros
/// - BUILD is optional: dot-separated alphanumeric/hyphen identifiers,
///   leading zeros allowed
///
/// # Examples
///
/// ```
/// use tag_validator::core::Validator;
/// use tag_validator::validators::version::Semver;
///
/// let validator = Semver::new();
///
/// assert!(validator.validate("1.0.0").is_ok());
/// assert!(validator.validate("1.2.3-alpha.1+build.5").is_ok());
///
/// assert!(validator.validate("1.0").is_err()); // missing patch
/// assert!(validator.validate("01.0.0").is_err()); // leading zero
/// assert!(validator.validate("v1.0.0").is_err()); // 'v' prefix
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Semver;

impl Semver {
    /// Creates a new semantic version validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns true when the string has the shape of a release version:
    /// its core, before any `-` prerelease or `+` build suffix, is exactly
    /// three dot-separated all-digit components.
    ///
    /// Shape says nothing about strictness; `01.0.0` is shaped like a
    /// release version but fails [`validate`](Validator::validate).
    #[must_use]
    pub fn is_shaped(input: &str) -> bool {
        let (core, _, _) = split_suffixes(input);
        let mut parts = 0;
        for part in core.split('.') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            parts += 1;
        }
        parts == 3
    }
}

/// Splits `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` into its three sections.
///
/// Build metadata is cut first: everything after the first `+` is build,
/// and only a `-` before it starts the prerelease.
fn split_suffixes(input: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, build) = match input.find('+') {
        Some(pos) => (&input[..pos], Some(&input[pos + 1..])),
        None => (input, None),
    };
    let (core, prerelease) = match rest.find('-') {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };
    (core, prerelease, build)
}

/// Checks one `MAJOR`/`MINOR`/`PATCH` component.
fn check_release_component(part: &str, name: &str) -> Result<(), ValidationError> {
    if part.is_empty() {
        return Err(ValidationError::new(
            "semver_empty_component",
            format!("{name} version cannot be empty"),
        ));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            "semver_non_numeric",
            format!("{name} version must be numeric"),
        ));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(ValidationError::new(
            "semver_leading_zero",
            format!("{name} version cannot have a leading zero"),
        ));
    }
    Ok(())
}

/// Checks a dot-separated identifier list (prerelease or build metadata).
///
/// `reject_leading_zero` applies the prerelease rule: an all-digit
/// identifier may not start with `0` unless it is exactly `0`.
fn check_identifiers(section: &str, name: &str, reject_leading_zero: bool) -> Result<(), ValidationError> {
    for ident in section.split('.') {
        if ident.is_empty() {
            return Err(ValidationError::new(
                "semver_empty_identifier",
                format!("{name} identifiers cannot be empty"),
            ));
        }
        if !ident.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(ValidationError::new(
                "semver_invalid_identifier",
                format!("{name} identifiers must be alphanumeric or hyphen"),
            ));
        }
        if reject_leading_zero
            && ident.len() > 1
            && ident.starts_with('0')
            && ident.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::new(
                "semver_identifier_leading_zero",
                format!("numeric {name} identifiers cannot have leading zeros"),
            ));
        }
    }
    Ok(())
}

impl Validator for Semver {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "semver_empty",
                "version string cannot be empty",
            ));
        }

        let (core, prerelease, build) = split_suffixes(input);

        let mut components = core.split('.');
        let (major, minor, patch) = match (components.next(), components.next(), components.next())
        {
            (Some(major), Some(minor), Some(patch)) if components.next().is_none() => {
                (major, minor, patch)
            }
            _ => {
                return Err(ValidationError::new(
                    "semver_invalid_format",
                    "version core must have exactly 3 components (MAJOR.MINOR.PATCH)",
                ));
            }
        };

        check_release_component(major, "major")?;
        check_release_component(minor, "minor")?;
        check_release_component(patch, "patch")?;

        if let Some(pre) = prerelease {
            check_identifiers(pre, "prerelease", true)?;
        }
        if let Some(bld) = build {
            check_identifiers(bld, "build metadata", false)?;
        }

        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::builder()
            .name("Semver")
            .description("Semantic Versioning 2.0.0 version string")
            .complexity(ValidationComplexity::Linear)
            .cacheable(true)
            .tag("version")
            .tag("semver")
            .build()
    }
}

/// Creates a semantic version validator.
#[must_use]
pub fn semver() -> Semver {
    Semver::new()
}

// ============================================================================
// TESTS
// ============================================================================
