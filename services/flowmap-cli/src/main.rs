//! flowmap command-line tool.
//!
//! Builds the reference-system transformation set for a flow source and
//! applies individual transformations to points.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use flowmap_common::EpsgCode;
use netcdf_format::{NetCdf, NetCdfConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "flowmap")]
#[command(about = "Inspect reference-system transformations of a flow source")]
struct Args {
    /// Path of the NetCDF flow file
    #[arg(long, env = "FLOWMAP_PATH")]
    path: PathBuf,

    /// Reference system of the source coordinates
    #[arg(long, env = "FLOWMAP_SRC_EPSG", default_value = "4326", value_parser = parse_epsg)]
    src_epsg: EpsgCode,

    /// Local destination reference system
    #[arg(long, env = "FLOWMAP_DST_EPSG", default_value = "28992", value_parser = parse_epsg)]
    dst_epsg: EpsgCode,

    /// Lower clamp bound
    #[arg(long, env = "FLOWMAP_VMIN", default_value_t = -0.5, allow_negative_numbers = true)]
    vmin: f64,

    /// Upper clamp bound
    #[arg(long, env = "FLOWMAP_VMAX", default_value_t = 0.5, allow_negative_numbers = true)]
    vmax: f64,

    /// Frame scale factor
    #[arg(long, env = "FLOWMAP_FRAMESCALE", default_value_t = 3.0)]
    framescale: f64,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the transformations with their source and target systems
    Transforms,

    /// Apply one named transformation to a point
    Convert {
        /// Transformation name, e.g. wgs842utm
        #[arg(long)]
        key: String,

        /// X coordinate (longitude or easting)
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Y coordinate (latitude or northing)
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },

    /// Validate the configuration
    Check,
}

fn parse_epsg(s: &str) -> Result<EpsgCode, String> {
    EpsgCode::parse(s).map_err(|e| e.to_string())
}

impl Args {
    fn config(&self) -> NetCdfConfig {
        NetCdfConfig::with_params(
            self.path.clone(),
            self.src_epsg,
            self.dst_epsg,
            self.vmin,
            self.vmax,
            self.framescale,
        )
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn list_transforms(nc: &NetCdf) -> Result<Vec<String>> {
    let set = nc.transforms()?;
    Ok(set
        .iter()
        .map(|(name, t)| format!("{:<10} {} -> {}", name, t.source_epsg(), t.target_epsg()))
        .collect())
}

fn convert(nc: &NetCdf, key: &str, x: f64, y: f64) -> Result<(f64, f64)> {
    let set = nc.transforms()?;
    Ok(set.transform(key, x, y)?)
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let nc = NetCdf::new(args.config());
    info!(path = %nc.config.path.display(), src = %nc.config.src_epsg, dst = %nc.config.dst_epsg, "Loaded configuration");

    match &args.command {
        Command::Transforms => {
            for line in list_transforms(&nc)? {
                println!("{}", line);
            }
        }
        Command::Convert { key, x, y } => {
            let (out_x, out_y) = convert(&nc, key, *x, *y)?;
            println!("{} {}", out_x, out_y);
        }
        Command::Check => {
            if let Err(e) = nc.config.validate() {
                warn!(error = %e, "Configuration rejected");
                bail!(e);
            }
            println!("configuration ok");
        }
    }

    Ok(())
}
