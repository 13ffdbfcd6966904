//! Context paths
//!
//! Authoring/preview URLs carry an explicit workspace and coordinate
//! override appended to the node path:
//!
//! ```text
//! /about@user-admin;language=fr&market=eu
//! ```
//!
//! Everything before `@` is the node path, the part up to `;` names the
//! workspace, and the remainder is a `&`-separated list of coordinate
//! overrides. An override value may carry a comma-separated fallback list;
//! only the first entry matters for detection.

use facet_space::{
    DimensionError, DimensionIdentifier, DimensionSpacePoint, DimensionValue, WorkspaceName,
    WorkspaceNameError,
};

/// A parsed context path
#[derive(Debug, Clone, PartialEq)]
pub struct ContextPath {
    node_path: String,
    workspace: WorkspaceName,
    coordinates: DimensionSpacePoint,
}

impl ContextPath {
    /// Cheap predicate: does this path carry a context suffix at all?
    #[inline]
    #[must_use]
    pub fn is_context_path(path: &str) -> bool {
        path.contains('@')
    }

    /// Parse a context path
    ///
    /// # Errors
    /// Returns error if the path carries no `@`, names an invalid workspace,
    /// or contains a malformed coordinate override
    pub fn parse(path: &str) -> Result<Self, ContextPathError> {
        let Some((node_path, context)) = path.split_once('@') else {
            return Err(ContextPathError::NotAContextPath {
                path: path.to_string(),
            });
        };

        let (workspace_raw, overrides_raw) = match context.split_once(';') {
            Some((workspace, overrides)) => (workspace, Some(overrides)),
            None => (context, None),
        };
        let workspace = WorkspaceName::new(workspace_raw)?;

        let mut coordinates = DimensionSpacePoint::empty();
        if let Some(overrides) = overrides_raw {
            for pair in overrides.split('&') {
                let Some((identifier, value)) = pair.split_once('=') else {
                    return Err(ContextPathError::MalformedOverride {
                        segment: pair.to_string(),
                    });
                };
                // Fallback lists ("fr,en") keep only their first entry.
                let value = match value.split_once(',') {
                    Some((first, _)) => first,
                    None => value,
                };
                coordinates.insert(
                    DimensionIdentifier::new(identifier)?,
                    DimensionValue::new(value)?,
                );
            }
        }

        Ok(Self {
            node_path: node_path.to_string(),
            workspace,
            coordinates,
        })
    }

    /// The plain node path without the context suffix
    #[inline]
    #[must_use]
    pub fn node_path(&self) -> &str {
        &self.node_path
    }

    /// The embedded workspace name
    #[inline]
    #[must_use]
    pub fn workspace(&self) -> &WorkspaceName {
        &self.workspace
    }

    /// The embedded coordinate overrides (may be empty)
    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> &DimensionSpacePoint {
        &self.coordinates
    }
}

/// Errors when parsing context paths
///
/// Always recovered locally by callers (live-workspace fallback); never
/// propagated out of request resolution.
#[derive(Debug, thiserror::Error)]
pub enum ContextPathError {
    /// The path carries no context suffix
    #[error("not a context path: {path:?}")]
    NotAContextPath {
        /// The offending path
        path: String,
    },

    /// The embedded workspace name is invalid
    #[error("invalid workspace in context path: {0}")]
    InvalidWorkspace(#[from] WorkspaceNameError),

    /// A coordinate override is not of the form `dimension=value`
    #[error("malformed coordinate override: {segment:?}")]
    MalformedOverride {
        /// The offending override segment
        segment: String,
    },

    /// A coordinate override has an empty identifier or value
    #[error("invalid coordinate override: {0}")]
    InvalidOverride(#[from] DimensionError),
}
