//! Coordinate transformations between two spatial references.

use flowmap_common::EpsgCode;
use std::sync::Arc;
use tracing::trace;

use crate::{ProjectionError, ProjectionResult, SpatialReference};

/// A transformation from one spatial reference to another.
///
/// Geographic systems take and return degrees with x = longitude and
/// y = latitude; projected systems use easting/northing in their own units.
#[derive(Debug, Clone)]
pub struct CoordinateTransformation {
    source: Arc<SpatialReference>,
    target: Arc<SpatialReference>,
}

impl CoordinateTransformation {
    /// Pair two already initialized references.
    pub fn new(source: Arc<SpatialReference>, target: Arc<SpatialReference>) -> Self {
        Self { source, target }
    }

    /// Build both references from EPSG codes and pair them.
    pub fn from_epsg(
        source: impl Into<EpsgCode>,
        target: impl Into<EpsgCode>,
    ) -> ProjectionResult<Self> {
        let source = Arc::new(SpatialReference::from_epsg(source)?);
        let target = Arc::new(SpatialReference::from_epsg(target)?);
        Ok(Self::new(source, target))
    }

    pub fn source(&self) -> &SpatialReference {
        &self.source
    }

    pub fn target(&self) -> &SpatialReference {
        &self.target
    }

    pub fn source_epsg(&self) -> EpsgCode {
        self.source.epsg()
    }

    pub fn target_epsg(&self) -> EpsgCode {
        self.target.epsg()
    }

    /// True if source and target carry the same code and definition.
    pub fn is_identity(&self) -> bool {
        self.source.epsg() == self.target.epsg()
            && self.source.definition() == self.target.definition()
    }

    /// Transform a single coordinate from source to target.
    pub fn transform_point(&self, x: f64, y: f64) -> ProjectionResult<(f64, f64)> {
        if self.is_identity() {
            return Ok((x, y));
        }

        let mut point = if self.source.is_geographic() {
            (x.to_radians(), y.to_radians(), 0.0)
        } else {
            (x, y, 0.0)
        };

        proj4rs::transform::transform(self.source.proj(), self.target.proj(), &mut point)
            .map_err(|e| ProjectionError::TransformFailed {
                x,
                y,
                message: format!("{:?}", e),
            })?;

        let (out_x, out_y) = if self.target.is_geographic() {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        if !out_x.is_finite() || !out_y.is_finite() {
            return Err(ProjectionError::TransformFailed {
                x,
                y,
                message: format!(
                    "non-finite result outside the domain of {}",
                    self.target.epsg()
                ),
            });
        }

        trace!(x, y, out_x, out_y, "Transformed point");
        Ok((out_x, out_y))
    }

    /// Transform a batch of coordinates. Fails on the first bad point.
    pub fn transform_points(&self, points: &[(f64, f64)]) -> ProjectionResult<Vec<(f64, f64)>> {
        points
            .iter()
            .map(|&(x, y)| self.transform_point(x, y))
            .collect()
    }
}
