//! The named set of transformations between the source system, the local
//! (destination) system, Web Mercator and WGS84.

use flowmap_common::EpsgCode;
use projection::{CoordinateTransformation, ProjectionResult, SpatialReference};
use std::sync::Arc;
use tracing::debug;

use crate::{NetCdfError, NetCdfResult};

/// Names of the transformations, in iteration order.
///
/// `utm` stands for the destination system, `web` for Web Mercator.
pub const TRANSFORM_NAMES: [&str; 8] = [
    "src2wgs84",
    "web2wgs84",
    "utm2wgs84",
    "wgs842utm",
    "wgs842web",
    "utm2web",
    "src2utm",
    "src2web",
];

/// Eight pairwise transformations built from one source and one destination code.
#[derive(Debug, Clone)]
pub struct TransformSet {
    pub src2wgs84: CoordinateTransformation,
    pub web2wgs84: CoordinateTransformation,
    pub utm2wgs84: CoordinateTransformation,
    pub wgs842utm: CoordinateTransformation,
    pub wgs842web: CoordinateTransformation,
    pub utm2web: CoordinateTransformation,
    pub src2utm: CoordinateTransformation,
    pub src2web: CoordinateTransformation,
}

impl TransformSet {
    /// Initialize the four reference systems and pair them up.
    ///
    /// Any reference system that fails to initialize fails the whole set.
    pub fn build(src_epsg: EpsgCode, dst_epsg: EpsgCode) -> ProjectionResult<Self> {
        let src = Arc::new(SpatialReference::from_epsg(src_epsg)?);
        let web = Arc::new(SpatialReference::from_epsg(EpsgCode::WEB_MERCATOR)?);
        let wgs84 = Arc::new(SpatialReference::from_epsg(EpsgCode::WGS84)?);
        let utm = Arc::new(SpatialReference::from_epsg(dst_epsg)?);

        let pair = |from: &Arc<SpatialReference>, to: &Arc<SpatialReference>| {
            CoordinateTransformation::new(Arc::clone(from), Arc::clone(to))
        };

        let set = Self {
            src2wgs84: pair(&src, &wgs84),
            web2wgs84: pair(&web, &wgs84),
            utm2wgs84: pair(&utm, &wgs84),
            wgs842utm: pair(&wgs84, &utm),
            wgs842web: pair(&wgs84, &web),
            utm2web: pair(&utm, &web),
            src2utm: pair(&src, &utm),
            src2web: pair(&src, &web),
        };

        debug!(%src_epsg, %dst_epsg, "Built transformation set");
        Ok(set)
    }

    /// Look up a transformation by name.
    pub fn get(&self, name: &str) -> Option<&CoordinateTransformation> {
        let t = match name {
            "src2wgs84" => &self.src2wgs84,
            "web2wgs84" => &self.web2wgs84,
            "utm2wgs84" => &self.utm2wgs84,
            "wgs842utm" => &self.wgs842utm,
            "wgs842web" => &self.wgs842web,
            "utm2web" => &self.utm2web,
            "src2utm" => &self.src2utm,
            "src2web" => &self.src2web,
            _ => return None,
        };
        Some(t)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        TRANSFORM_NAMES.iter().copied()
    }

    /// All transformations with their names, in [`TRANSFORM_NAMES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CoordinateTransformation)> {
        [
            &self.src2wgs84,
            &self.web2wgs84,
            &self.utm2wgs84,
            &self.wgs842utm,
            &self.wgs842web,
            &self.utm2web,
            &self.src2utm,
            &self.src2web,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, t)| (TRANSFORM_NAMES[i], t))
    }

    pub fn len(&self) -> usize {
        TRANSFORM_NAMES.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Apply the named transformation to one point.
    pub fn transform(&self, name: &str, x: f64, y: f64) -> NetCdfResult<(f64, f64)> {
        let t = self
            .get(name)
            .ok_or_else(|| NetCdfError::MissingData(format!("transformation '{}'", name)))?;
        Ok(t.transform_point(x, y)?)
    }
}
