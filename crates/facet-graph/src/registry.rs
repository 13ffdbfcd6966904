//! Subgraph registry
//!
//! Provides [`SubgraphRegistry`], the immutable index mapping every
//! (content stream, dimension space point) pair to its subgraph with O(1)
//! lookup by identity hash.

use crate::sources::{DimensionCombinationSource, SourceError, SubgraphFactory, WorkspaceFinder};
use facet_space::{IdentityHash, SubgraphIdentifier};
use indexmap::IndexMap;

/// Immutable index of all subgraph variants
///
/// Built eagerly over the workspace × combination cross-product, once, at
/// warm-up time. Build-then-publish: the finished registry is never mutated;
/// a rebuild produces a new value the embedder swaps in atomically (behind
/// an `Arc`), so concurrent readers never observe a partially built index.
#[derive(Debug)]
pub struct SubgraphRegistry<S> {
    subgraphs: IndexMap<IdentityHash, Entry<S>>,
}

#[derive(Debug)]
struct Entry<S> {
    identifier: SubgraphIdentifier,
    subgraph: S,
}

impl<S> SubgraphRegistry<S> {
    /// Build the registry over the full workspace × combination cross-product
    ///
    /// For each workspace returned by `workspaces` and each combination
    /// returned by `combinations`, constructs a [`SubgraphIdentifier`] from
    /// the workspace's content stream and the combination, and installs the
    /// factory-created subgraph under its identity hash.
    ///
    /// # Errors
    /// Any enumerator or factory failure aborts the build, as does a
    /// duplicate identity hash; a partially built registry is never returned.
    pub fn build<F>(
        workspaces: &dyn WorkspaceFinder,
        combinations: &dyn DimensionCombinationSource,
        factory: &F,
    ) -> Result<Self, RegistryError>
    where
        F: SubgraphFactory<Subgraph = S>,
    {
        let all_workspaces = workspaces.find_all()?;
        let all_combinations = combinations.find_all()?;

        let mut subgraphs =
            IndexMap::with_capacity(all_workspaces.len() * all_combinations.len());
        for workspace in &all_workspaces {
            for combination in &all_combinations {
                let identifier = SubgraphIdentifier::new(
                    workspace.content_stream().cloned(),
                    combination.clone(),
                );
                let hash = identifier.identity_hash();
                let subgraph = factory.create_subgraph(&identifier)?;
                tracing::debug!(workspace = %workspace.name(), identifier = %identifier, hash = %hash.short(), "installing subgraph");
                if subgraphs
                    .insert(hash, Entry { identifier: identifier.clone(), subgraph })
                    .is_some()
                {
                    return Err(RegistryError::DuplicateIdentity { identifier, hash });
                }
            }
        }

        tracing::info!(
            workspaces = all_workspaces.len(),
            combinations = all_combinations.len(),
            subgraphs = subgraphs.len(),
            "subgraph registry built"
        );
        Ok(Self { subgraphs })
    }

    /// Look up a subgraph by its identifier
    ///
    /// Exact coordinate match only; absence is `None`, never an error.
    #[inline]
    #[must_use]
    pub fn get_by_identifier(&self, identifier: &SubgraphIdentifier) -> Option<&S> {
        self.get_by_identity_hash(&identifier.identity_hash())
    }

    /// Look up a subgraph by a precomputed identity hash
    #[inline]
    #[must_use]
    pub fn get_by_identity_hash(&self, hash: &IdentityHash) -> Option<&S> {
        self.subgraphs.get(hash).map(|entry| &entry.subgraph)
    }

    /// Iterate over all subgraphs in initialization order
    pub fn subgraphs(&self) -> impl Iterator<Item = &S> {
        self.subgraphs.values().map(|entry| &entry.subgraph)
    }

    /// Iterate over (identifier, subgraph) pairs in initialization order
    pub fn entries(&self) -> impl Iterator<Item = (&SubgraphIdentifier, &S)> {
        self.subgraphs
            .values()
            .map(|entry| (&entry.identifier, &entry.subgraph))
    }

    /// Number of registered subgraphs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.subgraphs.len()
    }

    /// Whether the registry holds no subgraphs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subgraphs.is_empty()
    }
}

/// Errors during registry construction
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An external enumerator or the factory failed
    #[error("registry build failed: {0}")]
    Source(#[from] SourceError),

    /// Two (workspace, combination) pairs produced the same identity hash
    #[error("duplicate identity hash {hash} for {identifier}")]
    DuplicateIdentity {
        /// The identifier whose hash collided
        identifier: SubgraphIdentifier,
        /// The colliding hash
        hash: IdentityHash,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{StaticCombinationSource, StaticWorkspaceFinder};
    use facet_space::{
        ContentStreamIdentifier, DimensionSpacePoint, Workspace, WorkspaceName,
    };

    #[derive(Debug, PartialEq)]
    struct TestSubgraph {
        label: String,
    }

    fn workspaces() -> StaticWorkspaceFinder {
        StaticWorkspaceFinder::new(vec![
            Workspace::new(
                WorkspaceName::live(),
                Some(ContentStreamIdentifier::new("cs-live")),
            ),
            Workspace::new(
                WorkspaceName::new("user-admin").unwrap(),
                Some(ContentStreamIdentifier::new("cs-admin")),
            ),
        ])
    }

    fn combinations() -> StaticCombinationSource {
        StaticCombinationSource::new(vec![
            DimensionSpacePoint::from_coordinates([("language", "de")]).unwrap(),
            DimensionSpacePoint::from_coordinates([("language", "en")]).unwrap(),
            DimensionSpacePoint::from_coordinates([("language", "fr")]).unwrap(),
        ])
    }

    fn factory() -> impl SubgraphFactory<Subgraph = TestSubgraph> {
        |identifier: &SubgraphIdentifier| -> Result<TestSubgraph, SourceError> {
            Ok(TestSubgraph {
                label: identifier.to_string(),
            })
        }
    }

    #[test]
    fn build_covers_full_cross_product() {
        let registry =
            SubgraphRegistry::build(&workspaces(), &combinations(), &factory()).unwrap();
        assert_eq!(registry.len(), 2 * 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn lookup_by_identifier_is_exact() {
        let registry =
            SubgraphRegistry::build(&workspaces(), &combinations(), &factory()).unwrap();

        let id = SubgraphIdentifier::new(
            Some(ContentStreamIdentifier::new("cs-live")),
            DimensionSpacePoint::from_coordinates([("language", "de")]).unwrap(),
        );
        let subgraph = registry.get_by_identifier(&id).unwrap();
        assert_eq!(subgraph.label, id.to_string());

        // No fallback or partial match: an unregistered coordinate misses.
        let miss = SubgraphIdentifier::new(
            Some(ContentStreamIdentifier::new("cs-live")),
            DimensionSpacePoint::from_coordinates([("language", "es")]).unwrap(),
        );
        assert!(registry.get_by_identifier(&miss).is_none());
    }

    #[test]
    fn lookup_by_hash_matches_lookup_by_identifier() {
        let registry =
            SubgraphRegistry::build(&workspaces(), &combinations(), &factory()).unwrap();

        let id = SubgraphIdentifier::new(
            Some(ContentStreamIdentifier::new("cs-admin")),
            DimensionSpacePoint::from_coordinates([("language", "fr")]).unwrap(),
        );
        let by_id = registry.get_by_identifier(&id).unwrap();
        let by_hash = registry.get_by_identity_hash(&id.identity_hash()).unwrap();
        assert!(std::ptr::eq(by_id, by_hash));
    }

    #[test]
    fn subgraphs_iterate_in_initialization_order() {
        let registry =
            SubgraphRegistry::build(&workspaces(), &combinations(), &factory()).unwrap();
        let labels: Vec<&str> = registry
            .subgraphs()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "cs-live@{language: de}");
        assert_eq!(labels[5], "cs-admin@{language: fr}");
    }

    #[test]
    fn no_duplicate_identity_hashes() {
        let registry =
            SubgraphRegistry::build(&workspaces(), &combinations(), &factory()).unwrap();
        let mut hashes: Vec<IdentityHash> = registry
            .entries()
            .map(|(id, _)| id.identity_hash())
            .collect();
        hashes.sort();
        hashes.dedup();
        assert_eq!(hashes.len(), registry.len());
    }

    #[test]
    fn duplicate_combination_aborts_build() {
        let point = DimensionSpacePoint::from_coordinates([("language", "de")]).unwrap();
        let combinations = StaticCombinationSource::new(vec![point.clone(), point]);
        let result = SubgraphRegistry::build(&workspaces(), &combinations, &factory());
        assert!(matches!(result, Err(RegistryError::DuplicateIdentity { .. })));
    }

    #[test]
    fn factory_failure_aborts_build() {
        let failing = |_: &SubgraphIdentifier| -> Result<TestSubgraph, SourceError> {
            Err(SourceError::new("subgraph factory", "backend down"))
        };
        let result = SubgraphRegistry::build(&workspaces(), &combinations(), &failing);
        assert!(matches!(result, Err(RegistryError::Source(_))));
    }

    #[test]
    fn workspace_without_content_stream_is_indexed() {
        let finder = StaticWorkspaceFinder::new(vec![Workspace::new(WorkspaceName::live(), None)]);
        let registry = SubgraphRegistry::build(&finder, &combinations(), &factory()).unwrap();
        assert_eq!(registry.len(), 3);

        let id = SubgraphIdentifier::new(
            None,
            DimensionSpacePoint::from_coordinates([("language", "en")]).unwrap(),
        );
        assert!(registry.get_by_identifier(&id).is_some());
    }
}
