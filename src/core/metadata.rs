//! Validator metadata for introspection
//!
//! Metadata lets callers inspect what a validator checks, order cheap checks
//! first, and generate documentation from a validator set.

use std::collections::HashMap;
use std::fmt;

// ============================================================================
// VALIDATOR METADATA
// ============================================================================

/// Metadata about a validator.
///
/// # Examples
///
/// ```rust
/// use tag_validator::core::{ValidationComplexity, ValidatorMetadata};
///
/// let metadata = ValidatorMetadata::builder()
///     .name("Dns1123Subdomain")
///     .description("RFC 1123 subdomain name")
///     .complexity(ValidationComplexity::Expensive)
///     .tag("naming")
///     .build();
///
/// assert_eq!(metadata.name, "Dns1123Subdomain");
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorMetadata {
    /// Human-readable name of the validator.
    pub name: String,

    /// Optional description of what the validator checks.
    pub description: Option<String>,

    /// Computational complexity of the validation.
    pub complexity: ValidationComplexity,

    /// Whether validation results can be safely cached.
    pub cacheable: bool,

    /// Tags for categorization.
    pub tags: Vec<String>,

    /// Version of the validator.
    pub version: Option<String>,

    /// Additional custom metadata.
    pub custom: HashMap<String, String>,
}

impl Default for ValidatorMetadata {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            description: None,
            complexity: ValidationComplexity::Constant,
            cacheable: true,
            tags: Vec::new(),
            version: None,
            custom: HashMap::new(),
        }
    }
}

impl ValidatorMetadata {
    /// Creates a new metadata builder.
    #[must_use]
    pub fn builder() -> ValidatorMetadataBuilder {
        ValidatorMetadataBuilder::default()
    }

    /// Creates simple metadata with just a name.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a tag to the metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

// ============================================================================
// VALIDATION COMPLEXITY
// ============================================================================

/// Computational complexity classification for validators.
///
/// Cheap validators should run before expensive ones when composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ValidationComplexity {
    /// O(1) operations: length caps, reserved-word comparisons.
    #[default]
    Constant,

    /// O(n) operations: charset scans, identifier walks.
    Linear,

    /// Regex matching and anything worse than linear.
    Expensive,
}

impl ValidationComplexity {
    /// Returns a numeric score for comparison (lower is cheaper).
    #[must_use]
    pub fn score(&self) -> u8 {
        match self {
            Self::Constant => 1,
            Self::Linear => 2,
            Self::Expensive => 3,
        }
    }
}

impl fmt::Display for ValidationComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "O(1)"),
            Self::Linear => write!(f, "O(n)"),
            Self::Expensive => write!(f, "O(n) regex or worse"),
        }
    }
}

// ============================================================================
// METADATA BUILDER
// ============================================================================

/// Builder for [`ValidatorMetadata`].
#[derive(Default)]
pub struct ValidatorMetadataBuilder {
    name: Option<String>,
    description: Option<String>,
    complexity: ValidationComplexity,
    cacheable: bool,
    tags: Vec<String>,
    version: Option<String>,
    custom: HashMap<String, String>,
}

impl ValidatorMetadataBuilder {
    /// Sets the validator name.
    #[must_use = "builder methods must be chained or built"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use = "builder methods must be chained or built"]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the complexity.
    #[must_use = "builder methods must be chained or built"]
    pub fn complexity(mut self, complexity: ValidationComplexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Sets whether the validator is cacheable.
    #[must_use = "builder methods must be chained or built"]
    pub fn cacheable(mut self, cacheable: bool) -> Self {
        self.cacheable = cacheable;
        self
    }

    /// Adds a tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the version.
    #[must_use = "builder methods must be chained or built"]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds custom metadata.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Builds the metadata.
    #[must_use]
    pub fn build(self) -> ValidatorMetadata {
        ValidatorMetadata {
            name: self.name.unwrap_or_else(|| "Unknown".to_string()),
            description: self.description,
            complexity: self.complexity,
            cacheable: self.cacheable,
            tags: self.tags,
            version: self.version,
            custom: self.custom,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
