//! Logical combinators
//!
//! Combinators compose validators over the same input type with static
//! dispatch. [`And`] requires both to pass, [`Or`] requires at least one,
//! and [`Not`] inverts a validator. When every branch of a combinator fails,
//! the branch errors are kept as nested errors on the combined error.
//!
//! # Examples
//!
//! ```rust
//! use tag_validator::core::{Validator, ValidatorExt};
//! use tag_validator::validators::naming::dns1123_label;
//! use tag_validator::validators::version::version_tag;
//!
//! // A string that must be usable both as a DNS label and as a version tag.
//! let validator = dns1123_label().and(version_tag());
//! assert!(validator.validate("v1-2-3").is_ok());
//! assert!(validator.validate("v1.2.3").is_err()); // dots are not label characters
//! ```

use crate::core::{ValidationError, Validator, ValidatorMetadata};

// ============================================================================
// AND
// ============================================================================

/// Both validators must pass.
///
/// Runs both validators so that when both fail the caller sees every
/// violation, not just the first.
#[derive(Debug, Clone, Copy)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validator for And<L, R>
where
    L: Validator,
    R: Validator<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match (self.left.validate(input), self.right.validate(input)) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(left), Err(right)) => Err(ValidationError::joined("and", vec![left, right])),
            (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let left = self.left.metadata();
        let right = self.right.metadata();
        ValidatorMetadata::builder()
            .name(format!("({} AND {})", left.name, right.name))
            .complexity(left.complexity.max(right.complexity))
            .cacheable(left.cacheable && right.cacheable)
            .build()
    }
}

// ============================================================================
// OR
// ============================================================================

/// At least one validator must pass.
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validator for Or<L, R>
where
    L: Validator,
    R: Validator<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        let right = match self.right.validate(input) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        Err(
            ValidationError::new("or_all_failed", "no alternative matched")
                .with_nested(vec![left, right]),
        )
    }

    fn metadata(&self) -> ValidatorMetadata {
        let left = self.left.metadata();
        let right = self.right.metadata();
        ValidatorMetadata::builder()
            .name(format!("({} OR {})", left.name, right.name))
            .complexity(left.complexity.max(right.complexity))
            .cacheable(left.cacheable && right.cacheable)
            .build()
    }
}

// ============================================================================
// NOT
// ============================================================================

/// Passes when the inner validator fails.
#[derive(Debug, Clone, Copy)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Validator> Validator for Not<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                format!("{} must not pass, but it did", self.inner.metadata().name),
            )),
            Err(_) => Ok(()),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let inner = self.inner.metadata();
        ValidatorMetadata::builder()
            .name(format!("NOT {}", inner.name))
            .complexity(inner.complexity)
            .cacheable(inner.cacheable)
            .build()
    }
}

// ============================================================================
// TESTS
// ============================================================================
