//! Facet Resolve - request-to-coordinate resolution
//!
//! The algorithmic core of content-variant selection:
//! - **DimensionValueDetector**: pluggable per-dimension detection strategies
//! - **DetectorRegistry**: resolution-mode → detector strategy registry
//! - **DimensionSpaceResolver**: one request in, one coordinate plus
//!   workspace name out
//! - **DetectSubgraphStage**: pipeline glue writing route parameters
//!
//! # Example
//!
//! ```rust
//! use facet_resolve::{DimensionSpaceResolver, RequestView, ResolverConfig, StaticDimensionSource};
//! use facet_space::{ContentDimension, ResolutionConfig, ResolutionMode};
//! use std::sync::Arc;
//!
//! let language = ContentDimension::new(
//!     "language".parse().unwrap(),
//!     ResolutionConfig::new(ResolutionMode::UriPathSegment),
//! )
//! .with_values(vec!["de".parse().unwrap(), "en".parse().unwrap()])
//! .with_default("en".parse().unwrap());
//!
//! let resolver = DimensionSpaceResolver::new(
//!     Arc::new(StaticDimensionSource::new(vec![language])),
//!     ResolverConfig::new(),
//! );
//!
//! let resolution = resolver.resolve(&RequestView::new("/de/about")).unwrap();
//! assert_eq!(resolution.path_segment_offset, 1);
//! assert!(resolution.workspace_name.is_live());
//! ```

#![warn(missing_docs)]

pub mod context_path;
pub mod detector;
pub mod engine;
pub mod request;
pub mod resolver;
pub mod stage;

// Re-exports
pub use context_path::{ContextPath, ContextPathError};
pub use detector::{
    ContextOverrideDetector, DimensionValueDetector, HostPrefixDetector, HostSuffixDetector,
    UriPathSegmentDetector,
};
pub use engine::{
    ContentDimensionSource, DimensionSpaceResolver, Resolution, ResolverConfig,
    StaticDimensionSource,
};
pub use request::{keys, ParameterValue, RequestView, RouteParameters};
pub use resolver::{DetectionError, DetectorRegistry};
pub use stage::DetectSubgraphStage;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for request resolution
    pub use crate::{
        ContentDimensionSource, DetectSubgraphStage, DetectionError, DetectorRegistry,
        DimensionSpaceResolver, DimensionValueDetector, RequestView, Resolution, ResolverConfig,
        RouteParameters,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
