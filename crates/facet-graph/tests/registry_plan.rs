//! Registry construction and lookup guarantees.
//!
//! Covers the warm-up contract end to end: eager cross-product build,
//! identity-hash purity, and atomic publish of a rebuilt registry.

use facet_graph::{
    SourceError, StaticCombinationSource, StaticWorkspaceFinder, SubgraphRegistry,
};
use facet_space::{
    ContentStreamIdentifier, DimensionSpacePoint, SubgraphIdentifier, Workspace, WorkspaceName,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[derive(Debug)]
struct RecordingSubgraph {
    identifier: SubgraphIdentifier,
}

fn factory(id: &SubgraphIdentifier) -> Result<RecordingSubgraph, SourceError> {
    Ok(RecordingSubgraph {
        identifier: id.clone(),
    })
}

fn point(pairs: &[(&str, &str)]) -> DimensionSpacePoint {
    DimensionSpacePoint::from_coordinates(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
        .unwrap()
}

fn two_by_four() -> (StaticWorkspaceFinder, StaticCombinationSource) {
    let workspaces = StaticWorkspaceFinder::new(vec![
        Workspace::new(
            WorkspaceName::live(),
            Some(ContentStreamIdentifier::new("cs-live")),
        ),
        Workspace::new(
            WorkspaceName::new("user-editor").unwrap(),
            Some(ContentStreamIdentifier::new("cs-editor")),
        ),
    ]);
    let combinations = StaticCombinationSource::new(vec![
        point(&[("language", "de"), ("market", "eu")]),
        point(&[("language", "de"), ("market", "us")]),
        point(&[("language", "en"), ("market", "eu")]),
        point(&[("language", "en"), ("market", "us")]),
    ]);
    (workspaces, combinations)
}

#[test]
fn registry_size_is_workspaces_times_combinations() {
    let (workspaces, combinations) = two_by_four();
    let registry = SubgraphRegistry::build(&workspaces, &combinations, &factory).unwrap();
    assert_eq!(registry.len(), 8);
}

#[test]
fn every_entry_resolves_through_both_lookup_paths() {
    let (workspaces, combinations) = two_by_four();
    let registry = SubgraphRegistry::build(&workspaces, &combinations, &factory).unwrap();

    for (identifier, _) in registry.entries() {
        let by_identifier = registry.get_by_identifier(identifier).unwrap();
        let by_hash = registry
            .get_by_identity_hash(&identifier.identity_hash())
            .unwrap();
        assert_eq!(&by_identifier.identifier, identifier);
        assert!(std::ptr::eq(by_identifier, by_hash));
    }
}

#[test]
fn lookup_is_pure_in_the_identity_hash() {
    let (workspaces, combinations) = two_by_four();
    let registry = SubgraphRegistry::build(&workspaces, &combinations, &factory).unwrap();

    // A hash recomputed from an order-scrambled but equal identifier hits
    // the same instance.
    let scrambled = SubgraphIdentifier::new(
        Some(ContentStreamIdentifier::new("cs-live")),
        point(&[("market", "eu"), ("language", "de")]),
    );
    let canonical = SubgraphIdentifier::new(
        Some(ContentStreamIdentifier::new("cs-live")),
        point(&[("language", "de"), ("market", "eu")]),
    );
    let a = registry.get_by_identifier(&scrambled).unwrap();
    let b = registry.get_by_identifier(&canonical).unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn rebuild_publishes_a_fresh_registry() {
    let (workspaces, combinations) = two_by_four();
    let published = Arc::new(SubgraphRegistry::build(&workspaces, &combinations, &factory).unwrap());

    // Readers hold the old registry while a replacement is built.
    let reader = Arc::clone(&published);

    let grown = StaticCombinationSource::new(vec![
        point(&[("language", "de"), ("market", "eu")]),
        point(&[("language", "fr"), ("market", "eu")]),
    ]);
    let replacement = Arc::new(SubgraphRegistry::build(&workspaces, &grown, &factory).unwrap());

    assert_eq!(reader.len(), 8);
    assert_eq!(replacement.len(), 4);

    let fr = SubgraphIdentifier::new(
        Some(ContentStreamIdentifier::new("cs-live")),
        point(&[("language", "fr"), ("market", "eu")]),
    );
    assert!(reader.get_by_identifier(&fr).is_none());
    assert!(replacement.get_by_identifier(&fr).is_some());
}

#[test]
fn empty_enumerations_build_empty_registries() {
    let no_workspaces = StaticWorkspaceFinder::default();
    let (_, combinations) = two_by_four();
    let registry = SubgraphRegistry::build(&no_workspaces, &combinations, &factory).unwrap();
    assert!(registry.is_empty());

    let (workspaces, _) = two_by_four();
    let no_combinations = StaticCombinationSource::default();
    let registry = SubgraphRegistry::build(&workspaces, &no_combinations, &factory).unwrap();
    assert!(registry.is_empty());
}
