//! Adaptive binarization.
//!
//! Hand-drawn sketches rarely have uniform lighting, so a single global
//! cutoff either swallows shadows or drops faint strokes. Each pixel is
//! instead compared against the mean of its local window: anything darker
//! than the neighborhood by more than a small bias is ink.

use crate::grid::{OccupancyGrid, FREE, OBSTACLE};
use image::GrayImage;

/// Side of the local averaging window, in pixels
const WINDOW: usize = 11;
/// Bias subtracted from the window mean before comparison
const BIAS: f32 = 2.0;

/// Threshold a grayscale image into an occupancy plane.
///
/// A pixel becomes an obstacle when its intensity is at most the local
/// window mean minus the bias (inverted threshold: dark ink reads as
/// foreground). Windows are clamped at the image border.
pub fn binarize(gray: &GrayImage) -> OccupancyGrid {
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    let pixels = gray.as_raw();

    // Summed-area table, one extra row/column of zeros.
    let mut integral = vec![0u64; (width + 1) * (height + 1)];
    for y in 0..height {
        let mut row_sum = 0u64;
        for x in 0..width {
            row_sum += pixels[y * width + x] as u64;
            integral[(y + 1) * (width + 1) + (x + 1)] =
                integral[y * (width + 1) + (x + 1)] + row_sum;
        }
    }

    let radius = WINDOW / 2;
    let mut cells = vec![FREE; width * height];
    for y in 0..height {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius).min(height - 1);
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius).min(width - 1);

            let sum = integral[(y1 + 1) * (width + 1) + (x1 + 1)]
                + integral[y0 * (width + 1) + x0]
                - integral[y0 * (width + 1) + (x1 + 1)]
                - integral[(y1 + 1) * (width + 1) + x0];
            let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f32;
            let mean = sum as f32 / count;

            if pixels[y * width + x] as f32 <= mean - BIAS {
                cells[y * width + x] = OBSTACLE;
            }
        }
    }

    OccupancyGrid::from_cells(width, height, cells)
}
