//! Detector resolution
//!
//! Provides [`DetectorRegistry`], the strategy registry mapping a
//! dimension's configured resolution mode to a concrete
//! [`DimensionValueDetector`].

use crate::detector::{
    DimensionValueDetector, HostPrefixDetector, HostSuffixDetector, UriPathSegmentDetector,
};
use facet_space::{ContentDimension, DimensionIdentifier, ResolutionMode};
use std::collections::HashMap;

/// Open strategy registry keyed by resolution mode
///
/// Built-in detectors are pre-registered; custom detectors may be added per
/// mode before the registry is handed to the resolution engine. Immutable
/// registration-wise thereafter.
#[derive(Debug)]
pub struct DetectorRegistry {
    detectors: HashMap<ResolutionMode, Box<dyn DimensionValueDetector>>,
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorRegistry {
    /// Create a registry with all built-in detectors registered
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ResolutionMode::UriPathSegment, Box::new(UriPathSegmentDetector));
        registry.register(ResolutionMode::HostPrefix, Box::new(HostPrefixDetector));
        registry.register(ResolutionMode::HostSuffix, Box::new(HostSuffixDetector));
        registry
    }

    /// Create a registry with no detectors registered
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            detectors: HashMap::new(),
        }
    }

    /// Register a detector for a resolution mode, replacing any previous one
    pub fn register(&mut self, mode: ResolutionMode, detector: Box<dyn DimensionValueDetector>) {
        self.detectors.insert(mode, detector);
    }

    /// Resolve the detector for a dimension's configured resolution mode
    ///
    /// # Errors
    /// Returns [`DetectionError::UnknownResolutionMode`] if no detector is
    /// registered for the mode; this is a fatal configuration error, not a
    /// per-request failure.
    pub fn resolve(
        &self,
        dimension: &ContentDimension,
    ) -> Result<&dyn DimensionValueDetector, DetectionError> {
        let mode = dimension.resolution().mode;
        self.detectors
            .get(&mode)
            .map(|detector| &**detector)
            .ok_or_else(|| DetectionError::UnknownResolutionMode {
                mode,
                dimension: dimension.identifier().clone(),
            })
    }
}

/// Fatal configuration errors during detector resolution
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    /// A dimension is configured with a mode no detector covers
    #[error("no detector registered for resolution mode {mode} (dimension {dimension})")]
    UnknownResolutionMode {
        /// The unmapped resolution mode
        mode: ResolutionMode,
        /// The dimension carrying the misconfiguration
        dimension: DimensionIdentifier,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_space::ResolutionConfig;

    fn dimension(mode: ResolutionMode) -> ContentDimension {
        ContentDimension::new("language".parse().unwrap(), ResolutionConfig::new(mode))
    }

    #[test]
    fn builtins_cover_all_modes() {
        let registry = DetectorRegistry::new();
        for mode in [
            ResolutionMode::UriPathSegment,
            ResolutionMode::HostPrefix,
            ResolutionMode::HostSuffix,
        ] {
            let detector = registry.resolve(&dimension(mode)).unwrap();
            assert_eq!(detector.name(), mode.as_str());
        }
    }

    #[test]
    fn empty_registry_reports_unknown_mode() {
        let registry = DetectorRegistry::empty();
        let result = registry.resolve(&dimension(ResolutionMode::UriPathSegment));
        assert!(matches!(
            result,
            Err(DetectionError::UnknownResolutionMode { .. })
        ));
    }

    #[test]
    fn registration_replaces_detector() {
        let mut registry = DetectorRegistry::new();
        registry.register(ResolutionMode::HostPrefix, Box::new(UriPathSegmentDetector));
        let detector = registry
            .resolve(&dimension(ResolutionMode::HostPrefix))
            .unwrap();
        assert_eq!(detector.name(), "uriPathSegment");
    }

    #[test]
    fn unknown_mode_error_names_the_dimension() {
        let registry = DetectorRegistry::empty();
        let err = registry
            .resolve(&dimension(ResolutionMode::HostSuffix))
            .unwrap_err();
        assert!(err.to_string().contains("hostSuffix"));
        assert!(err.to_string().contains("language"));
    }
}
