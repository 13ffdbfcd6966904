//! Dimension space points
//!
//! A [`DimensionSpacePoint`] is the canonical multi-dimensional coordinate
//! identifying one content variant along all configured variation axes.

use crate::dimension::{DimensionError, DimensionIdentifier, DimensionValue};
use crate::identity::{IdentityHash, IdentityHashError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Coordinate identifying one content variant
///
/// Ordered mapping from dimension identifier to resolved value. Backed by a
/// `BTreeMap` so equality and the serialized form are independent of
/// insertion order; dimensions without a resolved value are absent keys,
/// never null-valued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionSpacePoint {
    coordinates: BTreeMap<DimensionIdentifier, DimensionValue>,
}

impl DimensionSpacePoint {
    /// The empty point (no dimensions configured or none resolved)
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a point from raw (identifier, value) string pairs
    ///
    /// # Errors
    /// Returns error if any identifier or value is empty
    pub fn from_coordinates<I, K, V>(pairs: I) -> Result<Self, DimensionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut coordinates = BTreeMap::new();
        for (identifier, value) in pairs {
            coordinates.insert(
                DimensionIdentifier::new(identifier)?,
                DimensionValue::new(value)?,
            );
        }
        Ok(Self { coordinates })
    }

    /// Record a coordinate, replacing any previous value for the dimension
    #[inline]
    pub fn insert(&mut self, identifier: DimensionIdentifier, value: DimensionValue) {
        self.coordinates.insert(identifier, value);
    }

    /// The resolved value for a dimension, if present
    #[inline]
    #[must_use]
    pub fn coordinate(&self, identifier: &DimensionIdentifier) -> Option<&DimensionValue> {
        self.coordinates.get(identifier)
    }

    /// Iterate over all coordinates, ordered by dimension identifier
    pub fn coordinates(&self) -> impl Iterator<Item = (&DimensionIdentifier, &DimensionValue)> {
        self.coordinates.iter()
    }

    /// Number of resolved dimensions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether no dimension resolved to a value
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Stable identity hash over the canonical JSON encoding
    ///
    /// Two points with equal coordinate mappings hash identically regardless
    /// of how they were assembled.
    #[must_use]
    pub fn identity_hash(&self) -> IdentityHash {
        // BTreeMap serialization is canonical, so this cannot fail.
        IdentityHash::compute_serializable(&self.coordinates)
            .unwrap_or_else(|_| IdentityHash::compute(b""))
    }

    /// Fallible variant of [`identity_hash`](Self::identity_hash)
    ///
    /// # Errors
    /// Returns error if JSON serialization fails
    pub fn try_identity_hash(&self) -> Result<IdentityHash, IdentityHashError> {
        IdentityHash::compute_serializable(&self.coordinates)
    }
}

impl Display for DimensionSpacePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (identifier, value)) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{identifier}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(DimensionIdentifier, DimensionValue)> for DimensionSpacePoint {
    fn from_iter<I: IntoIterator<Item = (DimensionIdentifier, DimensionValue)>>(iter: I) -> Self {
        Self {
            coordinates: iter.into_iter().collect(),
        }
    }
}
