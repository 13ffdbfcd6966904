//! Content dimension model
//!
//! Declares the variation axes of a content tree:
//! - [`DimensionIdentifier`] / [`DimensionValue`]: validated string newtypes
//! - [`ResolutionMode`]: how a dimension extracts its value from a request
//! - [`DetectorOptions`] / [`ResolutionConfig`]: per-dimension detector tuning
//! - [`ContentDimension`]: the immutable dimension declaration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Unique identifier of a content dimension (e.g. `language`, `market`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionIdentifier(String);

impl DimensionIdentifier {
    /// Create a dimension identifier
    ///
    /// # Errors
    /// Returns error if the identifier is empty
    pub fn new(value: impl Into<String>) -> Result<Self, DimensionError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DimensionError::EmptyIdentifier);
        }
        Ok(Self(value))
    }

    /// The raw identifier string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DimensionIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DimensionIdentifier {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// One resolved value along a dimension (e.g. `de`, `en_US`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionValue(String);

impl DimensionValue {
    /// Create a dimension value
    ///
    /// # Errors
    /// Returns error if the value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, DimensionError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DimensionError::EmptyValue);
        }
        Ok(Self(value))
    }

    /// The raw value string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DimensionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DimensionValue {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Strategy a dimension uses to extract its value from a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionMode {
    /// Value encoded as a leading URI path segment
    UriPathSegment,

    /// Value encoded as the leading host label
    HostPrefix,

    /// Value encoded as the trailing host label
    HostSuffix,
}

impl ResolutionMode {
    /// Stable name for logging and diagnostics
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UriPathSegment => "uriPathSegment",
            Self::HostPrefix => "hostPrefix",
            Self::HostSuffix => "hostSuffix",
        }
    }
}

impl Display for ResolutionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detector option set for one dimension
///
/// The configured options are immutable; the resolution engine clones and
/// overrides them per request (injecting the delimiter and the running
/// path segment offset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorOptions {
    /// Segment/label position the detector reads; governs detection order
    /// and, for path-segment dimensions, which leading segment is consumed.
    /// Unset sorts as offset 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,

    /// Delimiter splitting composite segment values (e.g. `en_US`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    /// Fall back to the dimension default even off the root path
    #[serde(default)]
    pub allow_empty_value: bool,

    /// Free-form options consumed by custom detectors
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl DetectorOptions {
    /// Create empty options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an explicit offset
    #[inline]
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// With a composite-value delimiter
    #[inline]
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Allow the default value off the root path
    #[inline]
    #[must_use]
    pub fn allow_empty_value(mut self) -> Self {
        self.allow_empty_value = true;
        self
    }

    /// Add a free-form option
    #[inline]
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Resolution configuration of one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionConfig {
    /// Resolution mode selecting the detector strategy
    pub mode: ResolutionMode,

    /// Configured detector options
    #[serde(default)]
    pub options: DetectorOptions,
}

impl ResolutionConfig {
    /// Create a configuration for the given mode with default options
    #[inline]
    #[must_use]
    pub fn new(mode: ResolutionMode) -> Self {
        Self {
            mode,
            options: DetectorOptions::default(),
        }
    }

    /// With detector options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: DetectorOptions) -> Self {
        self.options = options;
        self
    }
}

/// Declaration of one content dimension
///
/// Immutable after configuration load. The declared values form the set a
/// detector may match against; an empty set accepts any non-empty candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDimension {
    identifier: DimensionIdentifier,
    #[serde(default)]
    values: Vec<DimensionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_value: Option<DimensionValue>,
    resolution: ResolutionConfig,
}

impl ContentDimension {
    /// Create a dimension with the given identifier and resolution config
    #[inline]
    #[must_use]
    pub fn new(identifier: DimensionIdentifier, resolution: ResolutionConfig) -> Self {
        Self {
            identifier,
            values: Vec::new(),
            default_value: None,
            resolution,
        }
    }

    /// With declared values
    #[inline]
    #[must_use]
    pub fn with_values(mut self, values: Vec<DimensionValue>) -> Self {
        self.values = values;
        self
    }

    /// With a default value
    #[inline]
    #[must_use]
    pub fn with_default(mut self, default: DimensionValue) -> Self {
        self.default_value = Some(default);
        self
    }

    /// The dimension identifier
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &DimensionIdentifier {
        &self.identifier
    }

    /// Declared values (empty = accept any non-empty candidate)
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[DimensionValue] {
        &self.values
    }

    /// Configured default value, if any
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> Option<&DimensionValue> {
        self.default_value.as_ref()
    }

    /// Resolution configuration
    #[inline]
    #[must_use]
    pub fn resolution(&self) -> &ResolutionConfig {
        &self.resolution
    }

    /// Check a candidate against the declared values
    ///
    /// Accepts any non-empty candidate when no values are declared.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        self.values.is_empty() || self.values.iter().any(|v| v.as_str() == candidate)
    }

    /// Configured detection offset (unset sorts as 0)
    #[inline]
    #[must_use]
    pub fn configured_offset(&self) -> usize {
        self.resolution.options.offset.unwrap_or(0)
    }
}

/// Errors in dimension declarations
#[derive(Debug, thiserror::Error)]
pub enum DimensionError {
    /// Dimension identifier must be non-empty
    #[error("dimension identifier must not be empty")]
    EmptyIdentifier,

    /// Dimension value must be non-empty
    #[error("dimension value must not be empty")]
    EmptyValue,
}
