//! NetCDF flow format: source settings, reference-system transformations and
//! a text dump of the loaded grid.
//!
//! A [`NetCdf`] holds a [`NetCdfConfig`]. Readers attach the decoded grid
//! variables and canvas settings; this crate only consumes them.
//!
//! # Reference systems
//!
//! [`NetCdf::transforms`] builds a [`TransformSet`] between four systems:
//! the source (`src`), the local destination (`utm`), Web Mercator (`web`,
//! EPSG:3857) and WGS84 (`wgs84`, EPSG:4326). The set is rebuilt on every
//! call.

pub mod config;
pub mod dump;
pub mod error;
pub mod transforms;

pub use config::NetCdfConfig;
pub use dump::render_dump;
pub use error::{NetCdfError, NetCdfResult};
pub use transforms::{TransformSet, TRANSFORM_NAMES};

use flowmap_common::{Canvas, Grid};
use std::path::PathBuf;

/// A NetCDF flow source with its configuration and, once loaded, its data.
#[derive(Debug)]
pub struct NetCdf {
    /// Settings given at construction
    pub config: NetCdfConfig,
    grid: Option<Grid>,
    canvas: Option<Canvas>,
}

impl NetCdf {
    pub fn new(config: NetCdfConfig) -> Self {
        Self {
            config,
            grid: None,
            canvas: None,
        }
    }

    /// Shorthand for a source at `path` with default settings.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(NetCdfConfig::new(path))
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = Some(grid);
    }

    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = Some(canvas);
    }

    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.set_grid(grid);
        self
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.set_canvas(canvas);
        self
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Build the transformation set for the configured codes.
    ///
    /// Not cached: each call initializes fresh reference systems.
    pub fn transforms(&self) -> NetCdfResult<TransformSet> {
        Ok(TransformSet::build(self.config.src_epsg, self.config.dst_epsg)?)
    }

    /// Render the attached grid and canvas.
    pub fn dump(&self) -> NetCdfResult<String> {
        let grid = self
            .grid
            .as_ref()
            .ok_or_else(|| NetCdfError::MissingData("grid".to_string()))?;
        let canvas = self
            .canvas
            .as_ref()
            .ok_or_else(|| NetCdfError::MissingData("canvas".to_string()))?;
        render_dump(grid, canvas)
    }
}
