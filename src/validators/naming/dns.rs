//! DNS-1123 name validators.
//!
//! RFC 1123 subdomain names are the naming rule reused by container and
//! orchestration systems: dot-separated lowercase alphanumeric labels with
//! interior hyphens, capped at 253 characters overall.

use regex::Regex;

use crate::core::{ValidationComplexity, ValidationError, Validator, ValidatorMetadata};

/// Format of a single DNS-1123 label.
pub const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";

/// Maximum length of a DNS-1123 label.
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;

/// Maximum length of a DNS-1123 subdomain.
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

const DNS1123_SUBDOMAIN_ERROR_MSG: &str = "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";

const DNS1123_LABEL_ERROR_MSG: &str = "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character";

// ============================================================================
// SUBDOMAIN VALIDATOR
// ============================================================================

/// Validates DNS-1123 subdomain names.
///
/// A valid subdomain is one or more dot-separated labels, each matching
/// `[a-z0-9]([-a-z0-9]*[a-z0-9])?`, with a total length of at most 253
/// characters. When both the length cap and the pattern are violated, the
/// two messages are joined with a comma into a single error; the individual
/// violations are also available as nested errors.
///
/// # Examples
///
/// ```
/// use tag_validator::core::Validator;
/// use tag_validator::validators::naming::Dns1123Subdomain;
///
/// let validator = Dns1123Subdomain::new();
///
/// assert!(validator.validate("my-service").is_ok());
/// assert!(validator.validate("a.b.c").is_ok());
///
/// assert!(validator.validate("My-Service").is_err()); // uppercase
/// assert!(validator.validate("-bad").is_err()); // leading hyphen
/// assert!(validator.validate("a..b").is_err()); // empty label
/// ```
#[derive(Debug, Clone)]
pub struct Dns1123Subdomain {
    pattern: Regex,
}

impl Dns1123Subdomain {
    /// Creates a new subdomain validator.
    #[must_use]
    pub fn new() -> Self {
        let pattern = Regex::new(&format!(
            "^{DNS1123_LABEL_FMT}(\\.{DNS1123_LABEL_FMT})*$"
        ))
        .expect("hardcoded DNS-1123 subdomain pattern is valid");

        Self { pattern }
    }
}

impl Default for Dns1123Subdomain {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Dns1123Subdomain {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if input.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
            errors.push(
                ValidationError::new(
                    "dns1123_subdomain_too_long",
                    format!(
                        "a valid DNS-1123 subdomain name must be at most {DNS1123_SUBDOMAIN_MAX_LENGTH} characters in length"
                    ),
                )
                .with_param("max_length", DNS1123_SUBDOMAIN_MAX_LENGTH),
            );
        }

        if !self.pattern.is_match(input) {
            errors.push(
                ValidationError::new("dns1123_subdomain_format", DNS1123_SUBDOMAIN_ERROR_MSG)
                    .with_param("value", input),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::joined("dns1123_subdomain", errors))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::builder()
            .name("Dns1123Subdomain")
            .description(format!(
                "RFC 1123 subdomain name, at most {DNS1123_SUBDOMAIN_MAX_LENGTH} characters"
            ))
            .complexity(ValidationComplexity::Expensive)
            .cacheable(true)
            .tag("naming")
            .tag("dns")
            .build()
    }
}

// ============================================================================
// LABEL VALIDATOR
// ============================================================================

/// Validates a single DNS-1123 label (no dots), at most 63 characters.
///
/// # Examples
///
/// ```
/// use tag_validator::core::Validator;
/// use tag_validator::validators::naming::Dns1123Label;
///
/// let validator = Dns1123Label::new();
///
/// assert!(validator.validate("my-service").is_ok());
/// assert!(validator.validate("a.b").is_err()); // dots not allowed in a label
/// ```
#[derive(Debug, Clone)]
pub struct Dns1123Label {
    pattern: Regex,
}

impl Dns1123Label {
    /// Creates a new label validator.
    #[must_use]
    pub fn new() -> Self {
        let pattern = Regex::new(&format!("^{DNS1123_LABEL_FMT}$"))
            .expect("hardcoded DNS-1123 label pattern is valid");

        Self { pattern }
    }
}

impl Default for Dns1123Label {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Dns1123Label {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if input.len() > DNS1123_LABEL_MAX_LENGTH {
            errors.push(
                ValidationError::new(
                    "dns1123_label_too_long",
                    format!(
                        "a valid DNS-1123 label must be at most {DNS1123_LABEL_MAX_LENGTH} characters in length"
                    ),
                )
                .with_param("max_length", DNS1123_LABEL_MAX_LENGTH),
            );
        }

        if !self.pattern.is_match(input) {
            errors.push(
                ValidationError::new("dns1123_label_format", DNS1123_LABEL_ERROR_MSG)
                    .with_param("value", input),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::joined("dns1123_label", errors))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::builder()
            .name("Dns1123Label")
            .description(format!(
                "RFC 1123 label, at most {DNS1123_LABEL_MAX_LENGTH} characters"
            ))
            .complexity(ValidationComplexity::Expensive)
            .cacheable(true)
            .tag("naming")
            .tag("dns")
            .build()
    }
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Creates a DNS-1123 subdomain validator.
#[must_use]
pub fn dns1123_subdomain() -> Dns1123Subdomain {
    Dns1123Subdomain::new()
}

/// Creates a DNS-1123 label validator.
#[must_use]
pub fn dns1123_label() -> Dns1123Label {
    Dns1123Label::new()
}

/// Checks that a string is a valid DNS-1123 subdomain name.
///
/// One-shot form of [`Dns1123Subdomain`] for callers that validate a single
/// value and propagate the error with `?`.
pub fn check_dns1123_subdomain(value: &str) -> Result<(), ValidationError> {
    Dns1123Subdomain::new().validate(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod subdomain {
        use super::*;

        #[test]
        fn test_valid_names() {
            let validator = Dns1123Subdomain::new();
            assert!(validator.validate("my-service").is_ok());
            assert!(validator.validate("a").is_ok());
            assert!(validator.validate("a.b.c").is_ok());
            assert!(validator.validate("0").is_ok());
            assert!(validator.validate("iris-classifier-v2").is_ok());
            assert!(validator.validate("svc.prod.example").is_ok());
        }

        #[test]
        fn test_uppercase_rejected() {
            let validator = Dns1123Subdomain::new();
            assert!(validator.validate("My-Service").is_err());
            assert!(validator.validate("A").is_err());
        }

        #[test]
        fn test_hyphen_placement() {
            let validator = Dns1123Subdomain::new();
            assert!(validator.validate("-bad").is_err());
            assert!(validator.validate("bad-").is_err());
            assert!(validator.validate("a-b").is_ok());
            assert!(validator.validate("a.-b").is_err());
        }

        #[test]
        fn test_empty_and_empty_labels() {
            let validator = Dns1123Subdomain::new();
            assert!(validator.validate("").is_err());
            assert!(validator.validate(".").is_err());
            assert!(validator.validate("a..b").is_err());
            assert!(validator.validate(".a").is_err());
            assert!(validator.validate("a.").is_err());
        }

        #[test]
        fn test_invalid_characters() {
            let validator = Dns1123Subdomain::new();
            assert!(validator.validate("under_score").is_err());
            assert!(validator.validate("spa ce").is_err());
            assert!(validator.validate("uni\u{00e9}").is_err());
        }

        #[test]
        fn test_length_cap() {
            let validator = Dns1123Subdomain::new();
            let at_cap = "a".repeat(DNS1123_SUBDOMAIN_MAX_LENGTH);
            assert!(validator.validate(&at_cap).is_ok());
            let over_cap = "a".repeat(DNS1123_SUBDOMAIN_MAX_LENGTH + 1);
            assert!(validator.validate(&over_cap).is_err());
        }

        #[test]
        fn test_over_cap_fails_regardless_of_content() {
            let validator = Dns1123Subdomain::new();
            // Valid charset, invalid length.
            let long_valid = "ab.".repeat(100) + "ab"; // 302 chars
            assert!(validator.validate(&long_valid).is_err());
        }

        #[test]
        fn test_both_violations_join_with_comma() {
            let validator = Dns1123Subdomain::new();
            let err = validator.validate(&"A".repeat(300)).unwrap_err();
            assert_eq!(err.code, "dns1123_subdomain");
            assert_eq!(err.nested.len(), 2);
            assert!(err.message.contains("253"));
            assert!(err.message.contains(','));
            assert!(err.message.contains("lowercase RFC 1123 subdomain"));
        }

        #[test]
        fn test_single_violation_is_single_message() {
            let validator = Dns1123Subdomain::new();
            let err = validator.validate("Bad").unwrap_err();
            assert_eq!(err.nested.len(), 1);
            assert_eq!(err.message, DNS1123_SUBDOMAIN_ERROR_MSG);
        }

        #[test]
        fn test_idempotent() {
            let validator = Dns1123Subdomain::new();
            assert_eq!(
                validator.validate("my-service").is_ok(),
                validator.validate("my-service").is_ok()
            );
            assert_eq!(
                validator.validate("-bad").is_err(),
                validator.validate("-bad").is_err()
            );
        }
    }

    mod label {
        use super::*;

        #[test]
        fn test_valid_labels() {
            let validator = Dns1123Label::new();
            assert!(validator.validate("my-service").is_ok());
            assert!(validator.validate("a").is_ok());
            assert!(validator.validate("123").is_ok());
        }

        #[test]
        fn test_dots_rejected() {
            let validator = Dns1123Label::new();
            assert!(validator.validate("a.b").is_err());
        }

        #[test]
        fn test_length_cap() {
            let validator = Dns1123Label::new();
            assert!(validator.validate(&"a".repeat(63)).is_ok());
            assert!(validator.validate(&"a".repeat(64)).is_err());
        }
    }

    #[test]
    fn test_check_helper() {
        assert!(check_dns1123_subdomain("my-service").is_ok());
        assert!(check_dns1123_subdomain("My-Service").is_err());
    }
}
