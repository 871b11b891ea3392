//! End-to-end behavior of a NetCDF source: defaults, transformation sets and dumps.

use flowmap_common::{Canvas, EpsgCode, Grid, GridArray};
use netcdf_format::{NetCdf, NetCdfConfig, NetCdfError, TRANSFORM_NAMES};
use test_utils::{assert_coords_approx_eq, create_test_array, epsg, points};

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_default_construction() {
    let nc = NetCdf::open("/data/flow.nc");

    assert_eq!(nc.config.src_epsg, EpsgCode(4326));
    assert_eq!(nc.config.dst_epsg, EpsgCode(28992));
    assert_eq!(nc.config.vmin, -0.5);
    assert_eq!(nc.config.vmax, 0.5);
    assert_eq!(nc.config.framescale, 3.0);
}

// =============================================================================
// Transformation sets
// =============================================================================

#[test]
fn test_default_transforms_have_eight_names() {
    let nc = NetCdf::open("/data/flow.nc");
    let set = nc.transforms().expect("default codes are valid");

    let mut names: Vec<&str> = set.keys().collect();
    names.sort_unstable();
    let mut expected = TRANSFORM_NAMES.to_vec();
    expected.sort_unstable();
    assert_eq!(names, expected);
    assert_eq!(set.iter().count(), 8);
}

#[test]
fn test_valid_code_pairs() {
    let pairs = [
        (epsg::WGS84, epsg::RD_NEW),
        (epsg::WGS84, epsg::UTM_31N),
        (epsg::UTM_31N, epsg::RD_NEW),
        (epsg::WEB_MERCATOR, epsg::WGS84),
    ];

    for (src, dst) in pairs {
        let config = NetCdfConfig::new("flow.nc").with_src_epsg(src).with_dst_epsg(dst);
        let set = NetCdf::new(config)
            .transforms()
            .unwrap_or_else(|e| panic!("{} -> {}: {}", src, dst, e));
        for name in TRANSFORM_NAMES {
            assert!(set.get(name).is_some());
        }
    }
}

#[test]
fn test_invalid_code_fails() {
    for config in [
        NetCdfConfig::new("flow.nc").with_src_epsg(epsg::INVALID),
        NetCdfConfig::new("flow.nc").with_dst_epsg(epsg::INVALID),
    ] {
        let result = NetCdf::new(config).transforms();
        assert!(matches!(result, Err(NetCdfError::Projection(_))));
    }
}

#[test]
fn test_repeated_calls_are_equivalent() {
    let nc = NetCdf::open("flow.nc");
    let first = nc.transforms().unwrap();
    let second = nc.transforms().unwrap();

    for ((name_a, a), (name_b, b)) in first.iter().zip(second.iter()) {
        assert_eq!(name_a, name_b);
        assert_eq!(a.source_epsg(), b.source_epsg());
        assert_eq!(a.target_epsg(), b.target_epsg());
    }

    let (x, y) = points::AMERSFOORT_WGS84;
    assert_coords_approx_eq!(
        first.wgs842utm.transform_point(x, y).unwrap(),
        second.wgs842utm.transform_point(x, y).unwrap(),
        1e-9
    );
}

#[test]
fn test_round_trip_through_local_system() {
    let set = NetCdf::open("flow.nc").transforms().unwrap();
    let (x, y) = points::AMERSFOORT_RD;

    let (lon, lat) = set.utm2wgs84.transform_point(x, y).unwrap();
    assert_coords_approx_eq!(set.wgs842utm.transform_point(lon, lat).unwrap(), (x, y), 1e-3);

    let (wx, wy) = set.utm2web.transform_point(x, y).unwrap();
    let (wlon, wlat) = set.web2wgs84.transform_point(wx, wy).unwrap();
    assert!((wlon - lon).abs() < 0.01 && (wlat - lat).abs() < 0.01);
}

// =============================================================================
// Dump
// =============================================================================

#[test]
fn test_dump_depth_and_width() {
    let grid = Grid::new().with(
        "depth",
        GridArray::new(vec![2, 2], vec![0.0_f64, 1.0, 0.5, 0.5]).unwrap(),
    );
    let canvas = Canvas::new().with("width", 100);
    let nc = NetCdf::open("flow.nc").with_grid(grid).with_canvas(canvas);

    let text = nc.dump().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines.contains(&"depth"));
    assert!(lines.contains(&" - shape: (2, 2)"));
    assert!(lines.contains(&" - type:  float64"));
    assert!(lines.contains(&" - min:   0.0"));
    assert!(lines.contains(&" - max:   1.0"));
    assert!(lines.contains(&"- width: 100"));
}

#[test]
fn test_dump_large_grid() {
    let nc = NetCdf::open("flow.nc")
        .with_grid(Grid::new().with("pattern", create_test_array(30, 20)))
        .with_canvas(Canvas::new().with("framescale", 3.0));

    let text = nc.dump().unwrap();
    assert!(text.contains(" - shape: (20, 30)\n"));
    assert!(text.contains(" - max:   29019.0\n"));
    assert!(text.contains("- framescale: 3.0\n"));
}
