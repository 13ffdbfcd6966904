//! Workspaces
//!
//! A workspace names one line of content history. The well-known `live`
//! workspace serves public requests; authoring requests address others via
//! context paths.

use crate::identity::ContentStreamIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

const LIVE: &str = "live";

/// Validated workspace name
///
/// Lowercase alphanumeric plus `-`, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkspaceName(String);

impl WorkspaceName {
    /// Create a workspace name
    ///
    /// # Errors
    /// Returns error if the name is empty or contains characters outside
    /// `a-z`, `0-9`, `-`
    pub fn new(value: impl Into<String>) -> Result<Self, WorkspaceNameError> {
        let value = value.into();
        if value.is_empty() {
            return Err(WorkspaceNameError::Empty);
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(WorkspaceNameError::InvalidCharacters { name: value });
        }
        Ok(Self(value))
    }

    /// The well-known `live` workspace serving public requests
    #[inline]
    #[must_use]
    pub fn live() -> Self {
        Self(LIVE.to_string())
    }

    /// Whether this is the `live` workspace
    #[inline]
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0 == LIVE
    }

    /// The raw name string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WorkspaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkspaceName {
    type Err = WorkspaceNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for WorkspaceName {
    type Error = WorkspaceNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkspaceName> for String {
    fn from(name: WorkspaceName) -> Self {
        name.0
    }
}

/// Errors in workspace names
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceNameError {
    /// Workspace name must be non-empty
    #[error("workspace name must not be empty")]
    Empty,

    /// Workspace name contains invalid characters
    #[error("workspace name contains invalid characters: {name:?}")]
    InvalidCharacters { name: String },
}

/// External workspace entity enumerated by a workspace finder
///
/// Not owned by this core; carried only for its name and content stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    name: WorkspaceName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_stream: Option<ContentStreamIdentifier>,
}

impl Workspace {
    /// Create a workspace
    #[inline]
    #[must_use]
    pub fn new(name: WorkspaceName, content_stream: Option<ContentStreamIdentifier>) -> Self {
        Self {
            name,
            content_stream,
        }
    }

    /// The workspace name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &WorkspaceName {
        &self.name
    }

    /// The associated content stream, if any
    #[inline]
    #[must_use]
    pub fn content_stream(&self) -> Option<&ContentStreamIdentifier> {
        self.content_stream.as_ref()
    }
}
