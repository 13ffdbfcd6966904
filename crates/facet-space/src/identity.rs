//! Identity hashing for subgraph addressing
//!
//! Provides [`IdentityHash`], a strongly-typed 32-byte hash, plus
//! [`ContentStreamIdentifier`] and [`SubgraphIdentifier`], the pair that
//! addresses exactly one content subgraph in the registry.

use crate::point::DimensionSpacePoint;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte identity hash (Blake3)
///
/// Used as the sole registry key for subgraph lookup.
/// Immutable and cheap to clone (Copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentityHash([u8; 32]);

impl IdentityHash {
    /// Create a new IdentityHash from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create hash from byte slice
    ///
    /// # Errors
    /// Returns error if slice length is not exactly 32 bytes
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdentityHashError> {
        if bytes.len() != 32 {
            return Err(IdentityHashError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Compute Blake3 hash of arbitrary data
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        let hash = blake3::hash(data);
        Self::new(*hash.as_bytes())
    }

    /// Compute hash from a serializable value (canonical JSON encoding)
    ///
    /// # Errors
    /// Returns error if serialization fails
    #[inline]
    pub fn compute_serializable<T>(value: &T) -> Result<Self, IdentityHashError>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_vec(value)?;
        Ok(Self::compute(&json))
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for IdentityHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for IdentityHash {
    type Err = IdentityHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8; 32]> for IdentityHash {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

impl serde::Serialize for IdentityHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> serde::Deserialize<'de> for IdentityHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdentityHashVisitor;

        impl<'de> serde::de::Visitor<'de> for IdentityHashVisitor {
            type Value = IdentityHash;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 32-byte hash as hex string or byte array")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                IdentityHash::from_slice(value).map_err(serde::de::Error::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(IdentityHashVisitor)
        } else {
            deserializer.deserialize_bytes(IdentityHashVisitor)
        }
    }
}

/// Errors that can occur when working with identity hashes
#[derive(Debug, thiserror::Error)]
pub enum IdentityHashError {
    /// Invalid hash length
    #[error("invalid hash length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Opaque identifier for a workspace's line of content history
///
/// Nullable at use sites: a subgraph identifier may carry no content stream
/// while the owning workspace has none assigned yet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ContentStreamIdentifier(String);

impl ContentStreamIdentifier {
    /// Create a content stream identifier from an opaque string
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw identifier string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentStreamIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentStreamIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Addresses one content subgraph: a content stream paired with a
/// dimension space point
///
/// Two identifiers with equal components always produce the same
/// [`IdentityHash`], which is the sole key used for registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubgraphIdentifier {
    content_stream: Option<ContentStreamIdentifier>,
    dimension_space_point: DimensionSpacePoint,
}

impl SubgraphIdentifier {
    /// Create a subgraph identifier
    #[inline]
    #[must_use]
    pub fn new(
        content_stream: Option<ContentStreamIdentifier>,
        dimension_space_point: DimensionSpacePoint,
    ) -> Self {
        Self {
            content_stream,
            dimension_space_point,
        }
    }

    /// The content stream component, if any
    #[inline]
    #[must_use]
    pub fn content_stream(&self) -> Option<&ContentStreamIdentifier> {
        self.content_stream.as_ref()
    }

    /// The coordinate component
    #[inline]
    #[must_use]
    pub fn dimension_space_point(&self) -> &DimensionSpacePoint {
        &self.dimension_space_point
    }

    /// Deterministic identity hash over both components
    ///
    /// Stable across processes: derived from the canonical JSON encoding,
    /// in which coordinates are ordered by dimension identifier.
    #[must_use]
    pub fn identity_hash(&self) -> IdentityHash {
        let mut hasher = blake3::Hasher::new();
        match &self.content_stream {
            Some(stream) => {
                hasher.update(&[1u8]);
                hasher.update(stream.as_str().as_bytes());
            }
            None => {
                hasher.update(&[0u8]);
            }
        }
        hasher.update(self.dimension_space_point.identity_hash().as_bytes());
        IdentityHash::new(*hasher.finalize().as_bytes())
    }
}

impl Display for SubgraphIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.content_stream {
            Some(stream) => write!(f, "{}@{}", stream, self.dimension_space_point),
            None => write!(f, "-@{}", self.dimension_space_point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::DimensionSpacePoint;

    fn point(pairs: &[(&str, &str)]) -> DimensionSpacePoint {
        DimensionSpacePoint::from_coordinates(
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .unwrap()
    }

    #[test]
    fn identity_hash_compute_deterministic() {
        let h1 = IdentityHash::compute(b"subgraph");
        let h2 = IdentityHash::compute(b"subgraph");
        assert_eq!(h1, h2);
    }

    #[test]
    fn identity_hash_display_and_parse() {
        let hash = IdentityHash::compute(b"test");
        let parsed: IdentityHash = hash.to_string().parse().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn identity_hash_from_slice_invalid_length() {
        let result = IdentityHash::from_slice(&[1u8; 31]);
        assert!(matches!(
            result,
            Err(IdentityHashError::InvalidLength { expected: 32, actual: 31 })
        ));
    }

    #[test]
    fn identity_hash_short() {
        let hash = IdentityHash::compute(b"test");
        let short = hash.short();
        assert_eq!(short.len(), 16);
        assert!(hash.to_string().starts_with(&short));
    }

    #[test]
    fn identity_hash_serde_roundtrip() {
        let hash = IdentityHash::compute(b"test");
        let json = serde_json::to_string(&hash).unwrap();
        let decoded: IdentityHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, decoded);
    }

    #[test]
    fn subgraph_identifier_equal_components_equal_hash() {
        let a = SubgraphIdentifier::new(
            Some(ContentStreamIdentifier::new("cs-1")),
            point(&[("language", "de"), ("market", "eu")]),
        );
        let b = SubgraphIdentifier::new(
            Some(ContentStreamIdentifier::new("cs-1")),
            point(&[("market", "eu"), ("language", "de")]),
        );
        assert_eq!(a, b);
        assert_eq!(a.identity_hash(), b.identity_hash());
    }

    #[test]
    fn subgraph_identifier_distinct_streams_distinct_hashes() {
        let p = point(&[("language", "de")]);
        let a = SubgraphIdentifier::new(Some(ContentStreamIdentifier::new("cs-1")), p.clone());
        let b = SubgraphIdentifier::new(Some(ContentStreamIdentifier::new("cs-2")), p.clone());
        let c = SubgraphIdentifier::new(None, p);
        assert_ne!(a.identity_hash(), b.identity_hash());
        assert_ne!(a.identity_hash(), c.identity_hash());
        assert_ne!(b.identity_hash(), c.identity_hash());
    }

    #[test]
    fn subgraph_identifier_distinct_points_distinct_hashes() {
        let stream = ContentStreamIdentifier::new("cs-1");
        let a = SubgraphIdentifier::new(Some(stream.clone()), point(&[("language", "de")]));
        let b = SubgraphIdentifier::new(Some(stream), point(&[("language", "en")]));
        assert_ne!(a.identity_hash(), b.identity_hash());
    }

    #[test]
    fn subgraph_identifier_display() {
        let id = SubgraphIdentifier::new(
            Some(ContentStreamIdentifier::new("cs-1")),
            point(&[("language", "de")]),
        );
        assert_eq!(id.to_string(), "cs-1@{language: de}");
    }
}
