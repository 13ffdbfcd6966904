//! Collaborator contracts for registry construction
//!
//! The registry enumerates workspaces and dimension-value combinations
//! through these traits and delegates subgraph construction to an injected
//! factory. Concrete backends live elsewhere; [`StaticWorkspaceFinder`] and
//! [`StaticCombinationSource`] cover embedders with fixed configuration and
//! the test suites.

use facet_space::{DimensionSpacePoint, SubgraphIdentifier, Workspace};

/// Enumerates all known workspaces
pub trait WorkspaceFinder: Send + Sync + std::fmt::Debug {
    /// List every workspace, in the backend's enumeration order
    ///
    /// # Errors
    /// Any failure is fatal to registry construction
    fn find_all(&self) -> Result<Vec<Workspace>, SourceError>;
}

/// Enumerates every legal dimension-value combination
pub trait DimensionCombinationSource: Send + Sync + std::fmt::Debug {
    /// List every combination, in the backend's enumeration order
    ///
    /// # Errors
    /// Any failure is fatal to registry construction
    fn find_all(&self) -> Result<Vec<DimensionSpacePoint>, SourceError>;
}

/// Creates the concrete subgraph for one identifier
///
/// Supplied by the storage backend; the registry itself never implements
/// subgraph construction.
pub trait SubgraphFactory: Send + Sync {
    /// The concrete subgraph type owned by the registry
    type Subgraph;

    /// Create the subgraph addressed by `identifier`
    ///
    /// # Errors
    /// Any failure is fatal to registry construction
    fn create_subgraph(
        &self,
        identifier: &SubgraphIdentifier,
    ) -> Result<Self::Subgraph, SourceError>;
}

impl<S, F> SubgraphFactory for F
where
    F: Fn(&SubgraphIdentifier) -> Result<S, SourceError> + Send + Sync,
{
    type Subgraph = S;

    fn create_subgraph(
        &self,
        identifier: &SubgraphIdentifier,
    ) -> Result<Self::Subgraph, SourceError> {
        self(identifier)
    }
}

/// Failure reported by an external collaborator
#[derive(Debug, thiserror::Error)]
#[error("{collaborator} failed: {message}")]
pub struct SourceError {
    /// Which collaborator failed
    pub collaborator: &'static str,

    /// Backend-specific failure description
    pub message: String,
}

impl SourceError {
    /// Create a source error
    #[inline]
    #[must_use]
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }
}

/// Workspace finder over a fixed workspace list
#[derive(Debug, Clone, Default)]
pub struct StaticWorkspaceFinder {
    workspaces: Vec<Workspace>,
}

impl StaticWorkspaceFinder {
    /// Create a finder over the given workspaces
    #[inline]
    #[must_use]
    pub fn new(workspaces: Vec<Workspace>) -> Self {
        Self { workspaces }
    }
}

impl WorkspaceFinder for StaticWorkspaceFinder {
    fn find_all(&self) -> Result<Vec<Workspace>, SourceError> {
        Ok(self.workspaces.clone())
    }
}

/// Combination source over a fixed combination list
#[derive(Debug, Clone, Default)]
pub struct StaticCombinationSource {
    combinations: Vec<DimensionSpacePoint>,
}

impl StaticCombinationSource {
    /// Create a source over the given combinations
    #[inline]
    #[must_use]
    pub fn new(combinations: Vec<DimensionSpacePoint>) -> Self {
        Self { combinations }
    }
}

impl DimensionCombinationSource for StaticCombinationSource {
    fn find_all(&self) -> Result<Vec<DimensionSpacePoint>, SourceError> {
        Ok(self.combinations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_space::WorkspaceName;

    #[test]
    fn static_workspace_finder_returns_all() {
        let finder = StaticWorkspaceFinder::new(vec![
            Workspace::new(WorkspaceName::live(), None),
            Workspace::new(WorkspaceName::new("user-admin").unwrap(), None),
        ]);
        let workspaces = finder.find_all().unwrap();
        assert_eq!(workspaces.len(), 2);
        assert_eq!(workspaces[0].name().as_str(), "live");
    }

    #[test]
    fn static_combination_source_returns_all() {
        let source = StaticCombinationSource::new(vec![
            DimensionSpacePoint::from_coordinates([("language", "de")]).unwrap(),
            DimensionSpacePoint::from_coordinates([("language", "en")]).unwrap(),
        ]);
        assert_eq!(source.find_all().unwrap().len(), 2);
    }

    #[test]
    fn closure_acts_as_factory() {
        let factory = |identifier: &SubgraphIdentifier| -> Result<String, SourceError> {
            Ok(identifier.to_string())
        };
        let point = DimensionSpacePoint::from_coordinates([("language", "de")]).unwrap();
        let id = SubgraphIdentifier::new(None, point);
        let subgraph = factory.create_subgraph(&id).unwrap();
        assert_eq!(subgraph, id.to_string());
    }

    #[test]
    fn source_error_display() {
        let err = SourceError::new("workspace finder", "connection refused");
        assert_eq!(err.to_string(), "workspace finder failed: connection refused");
    }
}
