//! Core validation trait

use crate::combinators::{And, Not, Or};

use super::{ValidationError, ValidatorMetadata};

// ============================================================================
// VALIDATOR TRAIT
// ============================================================================

/// Main validation trait.
///
/// A validator is a pure predicate over a borrowed input: it either passes
/// silently or returns a [`ValidationError`] describing the violated rule.
/// Validators hold no mutable state, so validating the same input twice
/// always yields the same result.
///
/// # Examples
///
/// ```rust
/// use tag_validator::core::{ValidationError, Validator};
///
/// struct NonEmpty;
///
/// impl Validator for NonEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::new("empty", "value cannot be empty"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonEmpty.validate("x").is_ok());
/// assert!(NonEmpty.validate("").is_err());
/// ```
pub trait Validator {
    /// Type of input this validator accepts.
    type Input: ?Sized;

    /// Validates the input, returning an error describing the violated rule.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Metadata describing this validator.
    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::default()
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator constructors available on every validator.
pub trait ValidatorExt: Validator + Sized {
    /// Both validators must pass.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validator<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validator<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Passes when this validator fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validator> ValidatorExt for T {}
