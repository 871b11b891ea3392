//! Human-readable dump of grid variables and canvas settings.
//!
//! Layout:
//!
//! ```text
//!
//! depth
//!  - shape: (2, 2)
//!  - type:  float64
//!  - min:   0.0
//!  - max:   1.0
//!
//! - width: 100
//!
//!
//! ```

use flowmap_common::{format_shape, Canvas, Grid, GridError};
use std::fmt::Write;
use tracing::debug;

use crate::NetCdfResult;

/// Render the dump text for a grid and a canvas.
///
/// Fails when a grid variable has no minimum or maximum (an empty array).
pub fn render_dump(grid: &Grid, canvas: &Canvas) -> NetCdfResult<String> {
    let mut out = String::new();

    writeln!(out)?;
    for (name, array) in grid.iter() {
        let min = array
            .min()
            .ok_or_else(|| GridError::EmptyArray(name.to_string()))?;
        let max = array
            .max()
            .ok_or_else(|| GridError::EmptyArray(name.to_string()))?;

        writeln!(out, "{}", name)?;
        writeln!(out, " - shape: {}", format_shape(array.shape()))?;
        writeln!(out, " - type:  {}", array.dtype())?;
        writeln!(out, " - min:   {}", min)?;
        writeln!(out, " - max:   {}", max)?;
    }

    writeln!(out)?;
    for (name, value) in canvas.iter() {
        writeln!(out, "- {}: {}", name, value)?;
    }

    writeln!(out)?;
    writeln!(out)?;

    debug!(
        variables = grid.len(),
        canvas_entries = canvas.len(),
        bytes = out.len(),
        "Rendered dump"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetCdfError;
    use flowmap_common::GridArray;

    #[test]
    fn test_exact_layout() {
        let grid = Grid::new().with(
            "depth",
            GridArray::new(vec![2, 2], vec![0.0_f64, 0.25, 0.5, 1.0]).unwrap(),
        );
        let canvas = Canvas::new().with("width", 100);

        let text = render_dump(&grid, &canvas).unwrap();
        assert_eq!(
            text,
            "\ndepth\n - shape: (2, 2)\n - type:  float64\n - min:   0.0\n - max:   1.0\n\n- width: 100\n\n\n"
        );
    }

    #[test]
    fn test_empty_inputs() {
        let text = render_dump(&Grid::new(), &Canvas::new()).unwrap();
        assert_eq!(text, "\n\n\n\n");
    }

    #[test]
    fn test_mixed_types_in_order() {
        let grid = Grid::new()
            .with("mask", GridArray::from_vec(vec![0_u8, 1, 1]))
            .with("u", GridArray::new(vec![1, 2], vec![-0.5_f32, 0.5]).unwrap());
        let canvas = Canvas::new()
            .with("framescale", 3.0)
            .with("cmap", "viridis")
            .with("extent", vec![0, 10]);

        let text = render_dump(&grid, &canvas).unwrap();
        let mask_at = text.find("mask\n - shape: (3,)\n - type:  uint8\n - min:   0\n - max:   1\n");
        let u_at = text.find("u\n - shape: (1, 2)\n - type:  float32\n - min:   -0.5\n - max:   0.5\n");
        assert!(mask_at.is_some(), "{}", text);
        assert!(u_at.is_some(), "{}", text);
        assert!(mask_at < u_at);

        assert!(text.contains("- framescale: 3.0\n- cmap: viridis\n- extent: [0, 10]\n"));
    }

    #[test]
    fn test_empty_array_fails() {
        let grid = Grid::new().with("depth", GridArray::new(vec![0], Vec::<f64>::new()).unwrap());
        let result = render_dump(&grid, &Canvas::new());
        assert!(matches!(
            result,
            Err(NetCdfError::Grid(GridError::EmptyArray(ref name))) if name == "depth"
        ));
    }
}
