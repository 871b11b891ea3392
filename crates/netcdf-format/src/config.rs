//! Configuration of a NetCDF flow source.

use flowmap_common::EpsgCode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::{NetCdfError, NetCdfResult};

pub const DEFAULT_SRC_EPSG: EpsgCode = EpsgCode::WGS84;
pub const DEFAULT_DST_EPSG: EpsgCode = EpsgCode::RD_NEW;
pub const DEFAULT_VMIN: f64 = -0.5;
pub const DEFAULT_VMAX: f64 = 0.5;
pub const DEFAULT_FRAMESCALE: f64 = 3.0;

fn default_src_epsg() -> EpsgCode {
    DEFAULT_SRC_EPSG
}

fn default_dst_epsg() -> EpsgCode {
    DEFAULT_DST_EPSG
}

fn default_vmin() -> f64 {
    DEFAULT_VMIN
}

fn default_vmax() -> f64 {
    DEFAULT_VMAX
}

fn default_framescale() -> f64 {
    DEFAULT_FRAMESCALE
}

/// Settings of a NetCDF flow file.
///
/// Values are stored as given; nothing is checked at construction.
/// Call [`NetCdfConfig::validate`] where bad values must be rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetCdfConfig {
    /// Location of the NetCDF file
    pub path: PathBuf,

    /// Reference system of the coordinates in the file
    #[serde(default = "default_src_epsg")]
    pub src_epsg: EpsgCode,

    /// Local projected reference system used for output
    #[serde(default = "default_dst_epsg")]
    pub dst_epsg: EpsgCode,

    /// Lower clamp bound for values
    #[serde(default = "default_vmin")]
    pub vmin: f64,

    /// Upper clamp bound for values
    #[serde(default = "default_vmax")]
    pub vmax: f64,

    /// Scale factor between the grid and the rendered frame
    #[serde(default = "default_framescale")]
    pub framescale: f64,
}

impl NetCdfConfig {
    /// Create a configuration with default codes, bounds and frame scale.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_params(
            path,
            DEFAULT_SRC_EPSG,
            DEFAULT_DST_EPSG,
            DEFAULT_VMIN,
            DEFAULT_VMAX,
            DEFAULT_FRAMESCALE,
        )
    }

    /// Create a configuration from every parameter.
    pub fn with_params(
        path: impl Into<PathBuf>,
        src_epsg: impl Into<EpsgCode>,
        dst_epsg: impl Into<EpsgCode>,
        vmin: f64,
        vmax: f64,
        framescale: f64,
    ) -> Self {
        let config = Self {
            path: path.into(),
            src_epsg: src_epsg.into(),
            dst_epsg: dst_epsg.into(),
            vmin,
            vmax,
            framescale,
        };
        debug!(?config, "Object constructed");
        config
    }

    pub fn with_src_epsg(mut self, epsg: impl Into<EpsgCode>) -> Self {
        self.src_epsg = epsg.into();
        self
    }

    pub fn with_dst_epsg(mut self, epsg: impl Into<EpsgCode>) -> Self {
        self.dst_epsg = epsg.into();
        self
    }

    pub fn with_bounds(mut self, vmin: f64, vmax: f64) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    pub fn with_framescale(mut self, framescale: f64) -> Self {
        self.framescale = framescale;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `FLOWMAP_PATH` is required. `FLOWMAP_SRC_EPSG`, `FLOWMAP_DST_EPSG`,
    /// `FLOWMAP_VMIN`, `FLOWMAP_VMAX` and `FLOWMAP_FRAMESCALE` are optional;
    /// values that fail to parse keep their defaults.
    pub fn from_env() -> NetCdfResult<Self> {
        let path = std::env::var("FLOWMAP_PATH")
            .map_err(|_| NetCdfError::MissingData("FLOWMAP_PATH".to_string()))?;
        let mut config = Self::new(path);

        if let Ok(val) = std::env::var("FLOWMAP_SRC_EPSG") {
            if let Ok(code) = EpsgCode::parse(&val) {
                config.src_epsg = code;
            }
        }

        if let Ok(val) = std::env::var("FLOWMAP_DST_EPSG") {
            if let Ok(code) = EpsgCode::parse(&val) {
                config.dst_epsg = code;
            }
        }

        if let Ok(val) = std::env::var("FLOWMAP_VMIN") {
            if let Ok(v) = val.parse() {
                config.vmin = v;
            }
        }

        if let Ok(val) = std::env::var("FLOWMAP_VMAX") {
            if let Ok(v) = val.parse() {
                config.vmax = v;
            }
        }

        if let Ok(val) = std::env::var("FLOWMAP_FRAMESCALE") {
            if let Ok(v) = val.parse() {
                config.framescale = v;
            }
        }

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> NetCdfResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(NetCdfError::InvalidConfig("path must not be empty".to_string()));
        }

        if !self.vmin.is_finite() || !self.vmax.is_finite() {
            return Err(NetCdfError::InvalidConfig(
                "vmin and vmax must be finite".to_string(),
            ));
        }

        if self.vmin >= self.vmax {
            return Err(NetCdfError::InvalidConfig(format!(
                "vmin ({}) must be below vmax ({})",
                self.vmin, self.vmax
            )));
        }

        if !(self.framescale > 0.0) || !self.framescale.is_finite() {
            return Err(NetCdfError::InvalidConfig(format!(
                "framescale must be a positive number, got {}",
                self.framescale
            )));
        }

        Ok(())
    }

    /// Clamp a value into `[vmin, vmax]`. NaN stays NaN.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }
        value.max(self.vmin).min(self.vmax)
    }

    /// Map `[vmin, vmax]` onto `[0, 1]`, clamping values outside the range.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }
        let range = self.vmax - self.vmin;
        if range.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.vmin) / range).clamp(0.0, 1.0)
        }
    }

    /// Size of the rendered frame for a grid of `width` x `height` cells.
    pub fn frame_size(&self, width: usize, height: usize) -> (usize, usize) {
        let scale = |n: usize| (n as f64 * self.framescale).round().max(0.0) as usize;
        (scale(width), scale(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetCdfConfig::new("flow.nc");
        assert_eq!(config.path, PathBuf::from("flow.nc"));
        assert_eq!(config.src_epsg, EpsgCode(4326));
        assert_eq!(config.dst_epsg, EpsgCode(28992));
        assert_eq!(config.vmin, -0.5);
        assert_eq!(config.vmax, 0.5);
        assert_eq!(config.framescale, 3.0);
    }

    #[test]
    fn test_values_stored_verbatim() {
        // Nonsensical values are kept as given.
        let config = NetCdfConfig::with_params("x.nc", 0, 0, 2.0, -2.0, -1.0);
        assert_eq!(config.src_epsg.code(), 0);
        assert_eq!(config.vmin, 2.0);
        assert_eq!(config.vmax, -2.0);
        assert_eq!(config.framescale, -1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = NetCdfConfig::new("flow.nc")
            .with_src_epsg(32631)
            .with_dst_epsg(EpsgCode::WEB_MERCATOR)
            .with_bounds(-1.0, 1.0)
            .with_framescale(2.0);

        assert_eq!(config.src_epsg, EpsgCode(32631));
        assert_eq!(config.dst_epsg, EpsgCode(3857));
        assert_eq!((config.vmin, config.vmax), (-1.0, 1.0));
        assert_eq!(config.framescale, 2.0);
        assert!(config.validate().is_ok());
    }

    // Single test so the process-wide FLOWMAP_* variables are not raced.
    #[test]
    fn test_from_env() {
        const VARS: [&str; 6] = [
            "FLOWMAP_PATH",
            "FLOWMAP_SRC_EPSG",
            "FLOWMAP_DST_EPSG",
            "FLOWMAP_VMIN",
            "FLOWMAP_VMAX",
            "FLOWMAP_FRAMESCALE",
        ];
        for var in VARS {
            std::env::remove_var(var);
        }

        assert!(matches!(
            NetCdfConfig::from_env(),
            Err(NetCdfError::MissingData(ref what)) if what == "FLOWMAP_PATH"
        ));

        std::env::set_var("FLOWMAP_PATH", "env.nc");
        assert_eq!(NetCdfConfig::from_env().unwrap(), NetCdfConfig::new("env.nc"));

        std::env::set_var("FLOWMAP_DST_EPSG", "EPSG:32631");
        std::env::set_var("FLOWMAP_VMIN", "not-a-number");
        std::env::set_var("FLOWMAP_VMAX", "2.5");
        std::env::set_var("FLOWMAP_FRAMESCALE", "1.5");
        std::env::set_var("FLOWMAP_SRC_EPSG", "bogus");

        let config = NetCdfConfig::from_env().unwrap();
        assert_eq!(config.dst_epsg, EpsgCode(32631));
        assert_eq!(config.src_epsg, EpsgCode::WGS84);
        assert_eq!(config.vmin, -0.5);
        assert_eq!(config.vmax, 2.5);
        assert_eq!(config.framescale, 1.5);

        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_validate() {
        assert!(NetCdfConfig::new("flow.nc").validate().is_ok());
        assert!(NetCdfConfig::new("").validate().is_err());
        assert!(NetCdfConfig::new("flow.nc")
            .with_bounds(0.5, 0.5)
            .validate()
            .is_err());
        assert!(NetCdfConfig::new("flow.nc")
            .with_framescale(0.0)
            .validate()
            .is_err());
        assert!(NetCdfConfig::new("flow.nc")
            .with_framescale(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_clamp_and_normalize() {
        let config = NetCdfConfig::new("flow.nc");
        assert_eq!(config.clamp(0.75), 0.5);
        assert_eq!(config.clamp(-3.0), -0.5);
        assert_eq!(config.clamp(0.1), 0.1);
        assert!(config.clamp(f64::NAN).is_nan());

        assert_eq!(config.normalize(-0.5), 0.0);
        assert_eq!(config.normalize(0.0), 0.5);
        assert_eq!(config.normalize(0.5), 1.0);
        assert_eq!(config.normalize(9.0), 1.0);

        let flat = config.with_bounds(1.0, 1.0);
        assert_eq!(flat.normalize(7.0), 0.5);
    }

    #[test]
    fn test_frame_size() {
        let config = NetCdfConfig::new("flow.nc");
        assert_eq!(config.frame_size(100, 50), (300, 150));
        assert_eq!(config.with_framescale(0.5).frame_size(3, 3), (2, 2));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: NetCdfConfig =
            serde_json::from_str(r#"{"path": "flow.nc", "dst_epsg": 32631}"#).unwrap();
        assert_eq!(config.src_epsg, DEFAULT_SRC_EPSG);
        assert_eq!(config.dst_epsg, EpsgCode(32631));
        assert_eq!(config.framescale, DEFAULT_FRAMESCALE);
    }
}
