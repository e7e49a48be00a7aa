//! Core validation types
//!
//! This module contains the fundamental pieces every validator builds on:
//! the [`Validator`] trait, the [`ValidationError`] type, and validator
//! metadata for introspection.

mod error;
mod metadata;
mod traits;

pub use error::ValidationError;
pub use metadata::{ValidationComplexity, ValidatorMetadata, ValidatorMetadataBuilder};
pub use traits::{Validator, ValidatorExt};
