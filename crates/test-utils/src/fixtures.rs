//! Reference coordinates and codes used across the test suite.

/// EPSG codes exercised by the tests.
pub mod epsg {
    pub const WGS84: u32 = 4326;
    pub const WEB_MERCATOR: u32 = 3857;
    pub const RD_NEW: u32 = 28992;
    pub const UTM_31N: u32 = 32631;
    /// Never assigned, rejected by every registry
    pub const INVALID: u32 = 0;
}

/// Known positions in several reference systems.
pub mod points {
    /// Amersfoort in WGS84 (lon, lat)
    pub const AMERSFOORT_WGS84: (f64, f64) = (5.38720621, 52.15517440);
    /// Amersfoort in RD New (x, y), the origin of the Dutch grid
    pub const AMERSFOORT_RD: (f64, f64) = (155000.0, 463000.0);
    /// Half the Web Mercator world width in meters
    pub const WEB_MERCATOR_HALF_WORLD: f64 = 20037508.342789244;
}
