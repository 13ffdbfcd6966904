//! Coordinate resolution engine
//!
//! Turns one inbound request into a [`DimensionSpacePoint`] plus a workspace
//! name. Detection runs per dimension in offset order; a running segment
//! offset keeps later path-segment dimensions targeting the next unconsumed
//! leading segment.

use crate::context_path::ContextPath;
use crate::detector::{ContextOverrideDetector, DimensionValueDetector};
use crate::request::RequestView;
use crate::resolver::{DetectionError, DetectorRegistry};
use facet_space::{
    ContentDimension, DimensionSpacePoint, ResolutionMode, WorkspaceName,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source of the configured content dimensions
///
/// Returns dimensions already ordered by declared priority; the engine
/// re-sorts them by configured offset before detection.
pub trait ContentDimensionSource: Send + Sync + std::fmt::Debug {
    /// All configured dimensions, ordered by declared priority
    fn dimensions_ordered_by_priority(&self) -> Vec<ContentDimension>;
}

/// Dimension source over a fixed dimension list
#[derive(Debug, Clone, Default)]
pub struct StaticDimensionSource {
    dimensions: Vec<ContentDimension>,
}

impl StaticDimensionSource {
    /// Create a source over the given dimensions (priority order)
    #[inline]
    #[must_use]
    pub fn new(dimensions: Vec<ContentDimension>) -> Self {
        Self { dimensions }
    }
}

impl ContentDimensionSource for StaticDimensionSource {
    fn dimensions_ordered_by_priority(&self) -> Vec<ContentDimension> {
        self.dimensions.clone()
    }
}

/// Resolution engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Delimiter splitting composite path-segment values (e.g. `en_US`)
    #[serde(default = "default_delimiter")]
    pub uri_path_segment_delimiter: String,
}

fn default_delimiter() -> String {
    "_".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            uri_path_segment_delimiter: default_delimiter(),
        }
    }
}

impl ResolverConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a path-segment delimiter
    #[inline]
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.uri_path_segment_delimiter = delimiter.into();
        self
    }
}

/// Outcome of one request's coordinate resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The resolved coordinate (dimensions without a value are absent)
    pub dimension_space_point: DimensionSpacePoint,

    /// The detected workspace (`live` unless a context path names another)
    pub workspace_name: WorkspaceName,

    /// Whether any leading path segment was consumed by detection
    pub uri_path_segment_used: bool,

    /// Count of leading path segments consumed; downstream routing strips
    /// this many segments before node path matching
    pub path_segment_offset: usize,
}

/// The coordinate resolution engine
///
/// Immutable after construction; per-request resolution is pure computation
/// over `&self` and the request view, so concurrent requests need no
/// synchronization.
#[derive(Debug)]
pub struct DimensionSpaceResolver {
    dimension_source: Arc<dyn ContentDimensionSource>,
    detectors: DetectorRegistry,
    context_detector: ContextOverrideDetector,
    config: ResolverConfig,
}

impl DimensionSpaceResolver {
    /// Create a resolver with the built-in detectors
    #[must_use]
    pub fn new(dimension_source: Arc<dyn ContentDimensionSource>, config: ResolverConfig) -> Self {
        Self {
            dimension_source,
            detectors: DetectorRegistry::new(),
            context_detector: ContextOverrideDetector,
            config,
        }
    }

    /// With a custom detector registry
    #[inline]
    #[must_use]
    pub fn with_detectors(mut self, detectors: DetectorRegistry) -> Self {
        self.detectors = detectors;
        self
    }

    /// Resolve one request into a coordinate and workspace name
    ///
    /// # Errors
    /// Only fatal configuration errors (unknown resolution mode) surface
    /// here; per-request conditions (missing values, malformed context
    /// paths) are handled by the default/omission and live-fallback
    /// policies.
    pub fn resolve(&self, request: &RequestView<'_>) -> Result<Resolution, DetectionError> {
        let path = request.path();
        let is_context_path = ContextPath::is_context_path(path);
        let dimensions = sorted_by_offset(self.dimension_source.dimensions_ordered_by_priority());

        let mut point = DimensionSpacePoint::empty();
        let mut uri_path_segment_used = false;
        let mut path_segment_offset = 0usize;

        for dimension in &dimensions {
            let detector = self.detectors.resolve(dimension)?;

            let mut options = dimension.resolution().options.clone();
            let is_path_segment_mode =
                dimension.resolution().mode == ResolutionMode::UriPathSegment;
            if is_path_segment_mode {
                options.delimiter = Some(self.config.uri_path_segment_delimiter.clone());
                if options.offset.is_none() {
                    options.offset = Some(path_segment_offset);
                }
            }

            if is_context_path {
                if let Some(value) =
                    self.context_detector.detect_value(dimension, request, &options)
                {
                    tracing::debug!(
                        dimension = %dimension.identifier(),
                        value = %value,
                        "coordinate from context override"
                    );
                    point.insert(dimension.identifier().clone(), value);
                    // The public URL may still carry the segment; probe the
                    // configured detector solely to keep segment stripping
                    // correct. The probed value is discarded.
                    if detector.consumes_path_segment()
                        && detector.detect_value(dimension, request, &options).is_some()
                    {
                        uri_path_segment_used = true;
                        path_segment_offset += 1;
                    }
                    continue;
                }
            }

            if let Some(value) = detector.detect_value(dimension, request, &options) {
                tracing::debug!(
                    dimension = %dimension.identifier(),
                    value = %value,
                    detector = detector.name(),
                    "coordinate detected"
                );
                point.insert(dimension.identifier().clone(), value);
                if is_path_segment_mode {
                    uri_path_segment_used = true;
                    path_segment_offset += 1;
                }
            } else if options.allow_empty_value || (is_path_segment_mode && request.is_root()) {
                if let Some(default) = dimension.default_value() {
                    point.insert(dimension.identifier().clone(), default.clone());
                }
            }
        }

        let workspace_name =
            detect_workspace_name(request).unwrap_or_else(WorkspaceName::live);
        tracing::debug!(
            point = %point,
            workspace = %workspace_name,
            consumed_segments = path_segment_offset,
            "request resolved"
        );

        Ok(Resolution {
            dimension_space_point: point,
            workspace_name,
            uri_path_segment_used,
            path_segment_offset,
        })
    }
}

/// Re-sort dimensions by configured offset, ascending
///
/// Stable: dimensions without an explicit offset sort as offset 0 and keep
/// their priority order among ties.
fn sorted_by_offset(mut dimensions: Vec<ContentDimension>) -> Vec<ContentDimension> {
    dimensions.sort_by_key(ContentDimension::configured_offset);
    dimensions
}

/// Extract the workspace name embedded in the trailing path segment
///
/// Any parse failure falls back to `None` (the caller substitutes `live`);
/// malformed context segments never fail a request.
fn detect_workspace_name(request: &RequestView<'_>) -> Option<WorkspaceName> {
    let tail = request.last_path_segment()?;
    if !ContextPath::is_context_path(tail) {
        return None;
    }
    ContextPath::parse(tail)
        .ok()
        .map(|context| context.workspace().clone())
}
