//! Generators for synthetic grid variables and canvases.
//!
//! These produce predictable, verifiable values so dump output and
//! statistics can be asserted exactly.

use flowmap_common::{Canvas, GridArray, Grid};

/// Creates a row-major test buffer where each cell is `col * 1000 + row`.
///
/// # Example
///
/// ```
/// use test_utils::create_test_values;
///
/// let values = create_test_values(10, 5);
/// assert_eq!(values.len(), 50);
/// assert_eq!(values[1], 1000.0); // col=1, row=0
/// assert_eq!(values[10], 1.0);   // col=0, row=1
/// ```
pub fn create_test_values(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a `(height, width)` float64 array with values `col * 1000 + row`.
pub fn create_test_array(width: usize, height: usize) -> GridArray {
    GridArray::new(vec![height, width], create_test_values(width, height))
        .expect("generated buffer matches shape")
}

/// Creates a U-velocity field (west-east, m/s) varying by row from -0.5 to 0.5.
pub fn create_u_velocity(width: usize, height: usize) -> GridArray {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        let factor = if height > 1 {
            row as f32 / (height - 1) as f32
        } else {
            0.5
        };
        for _col in 0..width {
            data.push(factor - 0.5);
        }
    }
    GridArray::new(vec![height, width], data).expect("generated buffer matches shape")
}

/// Creates a V-velocity field (south-north, m/s) varying by column from -0.5 to 0.5.
pub fn create_v_velocity(width: usize, height: usize) -> GridArray {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            let factor = if width > 1 {
                col as f32 / (width - 1) as f32
            } else {
                0.5
            };
            data.push(factor - 0.5);
        }
    }
    GridArray::new(vec![height, width], data).expect("generated buffer matches shape")
}

/// A grid with `u` and `v` velocity fields of the given size.
pub fn create_velocity_grid(width: usize, height: usize) -> Grid {
    Grid::new()
        .with("u", create_u_velocity(width, height))
        .with("v", create_v_velocity(width, height))
}

/// A canvas describing a `width` x `height` render target.
pub fn create_canvas(width: usize, height: usize) -> Canvas {
    Canvas::new()
        .with("width", width)
        .with("height", height)
}
