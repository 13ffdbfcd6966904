//! Dimension value detectors
//!
//! Provides the [`DimensionValueDetector`] strategy trait and the built-in
//! detectors: URI path segment, backend context override, and host
//! prefix/suffix.

use crate::context_path::ContextPath;
use crate::request::RequestView;
use facet_space::{ContentDimension, DetectorOptions, DimensionValue};

/// Strategy extracting one dimension's raw value from a request
///
/// Detection is pure: a detector inspects the request view and the override
/// options, touches no shared state, and yields `None` when the request
/// carries no value for the dimension.
pub trait DimensionValueDetector: Send + Sync + std::fmt::Debug {
    /// Detect the dimension's value on this request, if present
    fn detect_value(
        &self,
        dimension: &ContentDimension,
        request: &RequestView<'_>,
        options: &DetectorOptions,
    ) -> Option<DimensionValue>;

    /// Whether a successful detection consumes a leading URI path segment
    ///
    /// Capability flag consulted for segment-offset bookkeeping; replaces
    /// runtime type inspection of detector instances.
    fn consumes_path_segment(&self) -> bool {
        false
    }

    /// Detector name (for logging/diagnostics)
    fn name(&self) -> &'static str;
}

/// Reads one leading URI path segment at the configured offset
///
/// The segment may encode composite values (`en_US`); when a delimiter is
/// set the segment is split and each part is checked against the
/// dimension's declared values. A dimension without declared values accepts
/// the first non-empty part.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriPathSegmentDetector;

impl DimensionValueDetector for UriPathSegmentDetector {
    fn detect_value(
        &self,
        dimension: &ContentDimension,
        request: &RequestView<'_>,
        options: &DetectorOptions,
    ) -> Option<DimensionValue> {
        if request.is_root() {
            return None;
        }
        let offset = options.offset.unwrap_or(0);
        let segment = request.path_segments().nth(offset)?;

        let matched = match options.delimiter.as_deref() {
            Some(delimiter) if !delimiter.is_empty() => segment
                .split(delimiter)
                .find(|part| dimension.accepts(part)),
            _ => Some(segment).filter(|s| dimension.accepts(s)),
        }?;
        DimensionValue::new(matched).ok()
    }

    fn consumes_path_segment(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "uriPathSegment"
    }
}

/// Reads an explicit backend-authoring coordinate from a context path
///
/// Used on authoring/preview requests instead of inferring the value from
/// the public URL; never consumes a path segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextOverrideDetector;

impl DimensionValueDetector for ContextOverrideDetector {
    fn detect_value(
        &self,
        dimension: &ContentDimension,
        request: &RequestView<'_>,
        _options: &DetectorOptions,
    ) -> Option<DimensionValue> {
        let context = ContextPath::parse(request.path()).ok()?;
        context
            .coordinates()
            .coordinate(dimension.identifier())
            .cloned()
    }

    fn name(&self) -> &'static str {
        "contextOverride"
    }
}

/// Matches the leading host label against the declared values
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPrefixDetector;

impl DimensionValueDetector for HostPrefixDetector {
    fn detect_value(
        &self,
        dimension: &ContentDimension,
        request: &RequestView<'_>,
        _options: &DetectorOptions,
    ) -> Option<DimensionValue> {
        let label = request.host()?.split('.').next()?;
        Some(label)
            .filter(|candidate| dimension.accepts(candidate))
            .and_then(|candidate| DimensionValue::new(candidate).ok())
    }

    fn name(&self) -> &'static str {
        "hostPrefix"
    }
}

/// Matches the trailing host label against the declared values
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSuffixDetector;

impl DimensionValueDetector for HostSuffixDetector {
    fn detect_value(
        &self,
        dimension: &ContentDimension,
        request: &RequestView<'_>,
        _options: &DetectorOptions,
    ) -> Option<DimensionValue> {
        let label = request.host()?.rsplit('.').next()?;
        Some(label)
            .filter(|candidate| dimension.accepts(candidate))
            .and_then(|candidate| DimensionValue::new(candidate).ok())
    }

    fn name(&self) -> &'static str {
        "hostSuffix"
    }
}
