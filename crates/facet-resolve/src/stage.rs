//! Request pipeline stage
//!
//! [`DetectSubgraphStage`] is the integration point with the HTTP layer:
//! it runs the coordinate resolution engine per inbound request and attaches
//! the outcome to the request's route parameters for downstream routing and
//! registry lookup.

use crate::engine::DimensionSpaceResolver;
use crate::request::{keys, ParameterValue, RequestView, RouteParameters};
use crate::resolver::DetectionError;

/// Pipeline stage attaching the resolved coordinate to route parameters
///
/// Stateless over requests; safe to share across worker threads.
#[derive(Debug)]
pub struct DetectSubgraphStage {
    resolver: DimensionSpaceResolver,
}

impl DetectSubgraphStage {
    /// Create the stage around a resolution engine
    #[inline]
    #[must_use]
    pub fn new(resolver: DimensionSpaceResolver) -> Self {
        Self { resolver }
    }

    /// Resolve the request and write the routing parameters
    ///
    /// Sets `dimensionSpacePoint`, `uriPathSegmentOffset`, and
    /// `workspaceName` in the parameter bag.
    ///
    /// # Errors
    /// Only fatal configuration errors surface; per-request conditions are
    /// absorbed by the resolution policies.
    pub fn handle(
        &self,
        request: &RequestView<'_>,
        parameters: &mut RouteParameters,
    ) -> Result<(), DetectionError> {
        let resolution = self.resolver.resolve(request)?;

        parameters.set(
            keys::DIMENSION_SPACE_POINT,
            ParameterValue::Point(resolution.dimension_space_point),
        );
        parameters.set(
            keys::URI_PATH_SEGMENT_OFFSET,
            ParameterValue::Number(resolution.path_segment_offset),
        );
        parameters.set(
            keys::WORKSPACE_NAME,
            ParameterValue::Workspace(resolution.workspace_name),
        );
        Ok(())
    }
}
