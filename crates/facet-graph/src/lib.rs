//! Facet Graph - subgraph registry
//!
//! Owns and indexes every content subgraph variant:
//! - **SubgraphRegistry**: immutable hash-keyed index over the
//!   workspace × dimension-combination cross-product
//! - **WorkspaceFinder** / **DimensionCombinationSource** /
//!   **SubgraphFactory**: collaborator contracts implemented by backends
//!
//! # Example
//!
//! ```rust
//! use facet_graph::{
//!     SourceError, StaticCombinationSource, StaticWorkspaceFinder, SubgraphRegistry,
//! };
//! use facet_space::{DimensionSpacePoint, SubgraphIdentifier, Workspace, WorkspaceName};
//!
//! let workspaces =
//!     StaticWorkspaceFinder::new(vec![Workspace::new(WorkspaceName::live(), None)]);
//! let combinations = StaticCombinationSource::new(vec![
//!     DimensionSpacePoint::from_coordinates([("language", "en")]).unwrap(),
//! ]);
//! let factory = |id: &SubgraphIdentifier| -> Result<String, SourceError> {
//!     Ok(id.to_string())
//! };
//!
//! let registry = SubgraphRegistry::build(&workspaces, &combinations, &factory).unwrap();
//! assert_eq!(registry.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod registry;
pub mod sources;

// Re-exports
pub use registry::{RegistryError, SubgraphRegistry};
pub use sources::{
    DimensionCombinationSource, SourceError, StaticCombinationSource, StaticWorkspaceFinder,
    SubgraphFactory, WorkspaceFinder,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for registry operations
    pub use crate::{
        DimensionCombinationSource, RegistryError, SourceError, SubgraphFactory,
        SubgraphRegistry, WorkspaceFinder,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
