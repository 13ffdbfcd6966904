//! Request views and route parameters
//!
//! [`RequestView`] is the read-only slice of an inbound request the
//! resolution engine consumes; [`RouteParameters`] is the typed parameter
//! bag it writes for downstream routing.

use facet_space::{DimensionSpacePoint, WorkspaceName};
use std::collections::HashMap;

/// Read-only view of one inbound request
///
/// Borrowed per request; the transport layer owns the underlying data.
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    path: &'a str,
    host: Option<&'a str>,
}

impl<'a> RequestView<'a> {
    /// Create a view over a request URI path
    #[inline]
    #[must_use]
    pub fn new(path: &'a str) -> Self {
        Self { path, host: None }
    }

    /// Attach the request host (needed by host-based detectors)
    #[inline]
    #[must_use]
    pub fn with_host(mut self, host: &'a str) -> Self {
        self.host = Some(host);
        self
    }

    /// The URI path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// The request host, if known
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&'a str> {
        self.host
    }

    /// Whether the path is exactly the root
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "/" || self.path.is_empty()
    }

    /// Iterate over the path segments, leading slash stripped
    pub fn path_segments(&self) -> impl Iterator<Item = &'a str> {
        self.path
            .trim_start_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
    }

    /// The trailing path segment, if any
    #[must_use]
    pub fn last_path_segment(&self) -> Option<&'a str> {
        self.path_segments().last()
    }
}

/// Route parameter keys consumed by downstream routing
pub mod keys {
    /// The resolved [`DimensionSpacePoint`](facet_space::DimensionSpacePoint)
    pub const DIMENSION_SPACE_POINT: &str = "dimensionSpacePoint";

    /// Count of leading path segments consumed by dimension detection
    pub const URI_PATH_SEGMENT_OFFSET: &str = "uriPathSegmentOffset";

    /// The detected workspace name
    pub const WORKSPACE_NAME: &str = "workspaceName";
}

/// One typed route parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// A resolved coordinate
    Point(DimensionSpacePoint),

    /// A numeric parameter
    Number(usize),

    /// A workspace name
    Workspace(WorkspaceName),

    /// A plain string parameter
    Text(String),
}

/// Typed key/value parameter bag attached to a request for downstream routing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParameters {
    values: HashMap<String, ParameterValue>,
}

impl RouteParameters {
    /// Create an empty parameter bag
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value under the key
    #[inline]
    pub fn set(&mut self, key: impl Into<String>, value: ParameterValue) {
        self.values.insert(key.into(), value);
    }

    /// Raw parameter access
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.values.get(key)
    }

    /// The resolved dimension space point, if set
    #[must_use]
    pub fn dimension_space_point(&self) -> Option<&DimensionSpacePoint> {
        match self.get(keys::DIMENSION_SPACE_POINT) {
            Some(ParameterValue::Point(point)) => Some(point),
            _ => None,
        }
    }

    /// The consumed-segment count, if set
    #[must_use]
    pub fn uri_path_segment_offset(&self) -> Option<usize> {
        match self.get(keys::URI_PATH_SEGMENT_OFFSET) {
            Some(ParameterValue::Number(offset)) => Some(*offset),
            _ => None,
        }
    }

    /// The detected workspace name, if set
    #[must_use]
    pub fn workspace_name(&self) -> Option<&WorkspaceName> {
        match self.get(keys::WORKSPACE_NAME) {
            Some(ParameterValue::Workspace(name)) => Some(name),
            _ => None,
        }
    }

    /// Number of parameters in the bag
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_view_path_segments() {
        let view = RequestView::new("/de/about/team");
        let segments: Vec<&str> = view.path_segments().collect();
        assert_eq!(segments, vec!["de", "about", "team"]);
        assert_eq!(view.last_path_segment(), Some("team"));
    }

    #[test]
    fn request_view_root() {
        assert!(RequestView::new("/").is_root());
        assert!(RequestView::new("").is_root());
        assert!(!RequestView::new("/de").is_root());
        assert_eq!(RequestView::new("/").path_segments().count(), 0);
    }

    #[test]
    fn request_view_host() {
        let view = RequestView::new("/").with_host("de.example.com");
        assert_eq!(view.host(), Some("de.example.com"));
        assert_eq!(RequestView::new("/").host(), None);
    }

    #[test]
    fn route_parameters_typed_getters() {
        let mut params = RouteParameters::new();
        assert!(params.is_empty());

        let point = DimensionSpacePoint::from_coordinates([("language", "de")]).unwrap();
        params.set(keys::DIMENSION_SPACE_POINT, ParameterValue::Point(point.clone()));
        params.set(keys::URI_PATH_SEGMENT_OFFSET, ParameterValue::Number(1));
        params.set(
            keys::WORKSPACE_NAME,
            ParameterValue::Workspace(WorkspaceName::live()),
        );

        assert_eq!(params.len(), 3);
        assert_eq!(params.dimension_space_point(), Some(&point));
        assert_eq!(params.uri_path_segment_offset(), Some(1));
        assert!(params.workspace_name().unwrap().is_live());
    }

    #[test]
    fn route_parameters_type_mismatch_is_none() {
        let mut params = RouteParameters::new();
        params.set(keys::URI_PATH_SEGMENT_OFFSET, ParameterValue::Text("1".into()));
        assert!(params.uri_path_segment_offset().is_none());
        assert!(matches!(
            params.get(keys::URI_PATH_SEGMENT_OFFSET),
            Some(ParameterValue::Text(_))
        ));
    }
}
