//! Facet Space - dimension model and identity value objects
//!
//! The value-object layer of the content-variant resolution core:
//! - **ContentDimension**: declared variation axes with resolution config
//! - **DimensionSpacePoint**: canonical coordinate identifying one variant
//! - **SubgraphIdentifier** / **IdentityHash**: stable registry addressing
//! - **Workspace** / **WorkspaceName**: lines of content history
//!
//! # Example
//!
//! ```rust
//! use facet_space::{ContentStreamIdentifier, DimensionSpacePoint, SubgraphIdentifier};
//!
//! let point = DimensionSpacePoint::from_coordinates([("language", "de")]).unwrap();
//! let identifier =
//!     SubgraphIdentifier::new(Some(ContentStreamIdentifier::new("cs-1")), point);
//!
//! // Equal components always yield the same identity hash.
//! assert_eq!(identifier.identity_hash(), identifier.clone().identity_hash());
//! ```

#![warn(missing_docs)]

pub mod dimension;
pub mod identity;
pub mod point;
pub mod workspace;

// Re-exports
pub use dimension::{
    ContentDimension, DetectorOptions, DimensionError, DimensionIdentifier, DimensionValue,
    ResolutionConfig, ResolutionMode,
};
pub use identity::{
    ContentStreamIdentifier, IdentityHash, IdentityHashError, SubgraphIdentifier,
};
pub use point::DimensionSpacePoint;
pub use workspace::{Workspace, WorkspaceName, WorkspaceNameError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the dimension model
    pub use crate::{
        ContentDimension, ContentStreamIdentifier, DetectorOptions, DimensionIdentifier,
        DimensionSpacePoint, DimensionValue, IdentityHash, ResolutionConfig, ResolutionMode,
        SubgraphIdentifier, Workspace, WorkspaceName,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
