//! Spatial reference definitions built from EPSG codes.

use flowmap_common::EpsgCode;
use proj4rs::Proj;
use std::fmt;
use tracing::debug;

use crate::{ProjectionError, ProjectionResult};

/// PROJ definition of WGS84 geographic coordinates.
pub const WGS84_DEFINITION: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// PROJ definition of spherical Web Mercator.
pub const WEB_MERCATOR_DEFINITION: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

/// Look up the PROJ definition string for an EPSG code.
///
/// WGS84 and Web Mercator are built in; every other code goes through the
/// `crs-definitions` registry.
pub fn definition_for(epsg: EpsgCode) -> Option<&'static str> {
    match epsg {
        EpsgCode::WGS84 => Some(WGS84_DEFINITION),
        EpsgCode::WEB_MERCATOR => Some(WEB_MERCATOR_DEFINITION),
        EpsgCode(0) => None,
        EpsgCode(code) => u16::try_from(code)
            .ok()
            .and_then(crs_definitions::from_code)
            .map(|def| def.proj4),
    }
}

fn is_geographic_definition(definition: &str) -> bool {
    definition.split_whitespace().any(|token| {
        matches!(
            token,
            "+proj=longlat" | "+proj=latlong" | "+proj=lonlat" | "+proj=latlon"
        )
    })
}

/// An initialized coordinate reference system.
pub struct SpatialReference {
    epsg: EpsgCode,
    definition: String,
    proj: Proj,
    geographic: bool,
}

impl SpatialReference {
    /// Build a reference system from its EPSG code.
    ///
    /// # Errors
    /// `UnknownEpsg` when no definition exists for the code, `InvalidDefinition`
    /// when the projection library cannot initialize it.
    pub fn from_epsg(epsg: impl Into<EpsgCode>) -> ProjectionResult<Self> {
        let epsg = epsg.into();
        let definition = definition_for(epsg).ok_or(ProjectionError::UnknownEpsg(epsg.code()))?;
        Self::from_proj_string(epsg, definition)
    }

    /// Build a reference system from an explicit PROJ string, tagged with `epsg`.
    pub fn from_proj_string(epsg: impl Into<EpsgCode>, definition: &str) -> ProjectionResult<Self> {
        let epsg = epsg.into();
        let proj = Proj::from_proj_string(definition).map_err(|e| {
            ProjectionError::InvalidDefinition {
                epsg: epsg.code(),
                definition: definition.to_string(),
                message: format!("{:?}", e),
            }
        })?;

        let geographic = is_geographic_definition(definition);
        debug!(%epsg, geographic, "Initialized spatial reference");

        Ok(Self {
            epsg,
            definition: definition.to_string(),
            proj,
            geographic,
        })
    }

    pub fn wgs84() -> ProjectionResult<Self> {
        Self::from_epsg(EpsgCode::WGS84)
    }

    pub fn web_mercator() -> ProjectionResult<Self> {
        Self::from_epsg(EpsgCode::WEB_MERCATOR)
    }

    pub fn epsg(&self) -> EpsgCode {
        self.epsg
    }

    /// The PROJ definition this system was built from.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// True if coordinates are longitude/latitude in degrees.
    pub fn is_geographic(&self) -> bool {
        self.geographic
    }

    pub(crate) fn proj(&self) -> &Proj {
        &self.proj
    }
}

impl fmt::Debug for SpatialReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialReference")
            .field("epsg", &self.epsg)
            .field("definition", &self.definition)
            .field("geographic", &self.geographic)
            .finish_non_exhaustive()
    }
}
