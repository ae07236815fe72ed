//! Connected-component speckle filtering.

use crate::core::PixelCoord;
use crate::grid::{OccupancyGrid, FREE, OBSTACLE};

/// Remove 8-connected obstacle regions smaller than `min_area` cells.
///
/// Specks of sensor noise and stray pen dots survive thresholding as
/// tiny blobs; dropping them before the clearance dilation keeps them
/// from blocking routes. `min_area == 0` keeps every region.
pub fn remove_small_regions(grid: &OccupancyGrid, min_area: usize) -> OccupancyGrid {
    if min_area == 0 {
        return grid.clone();
    }

    let (width, height) = (grid.width(), grid.height());
    let mut cells = grid.as_bytes().to_vec();
    let mut visited = vec![false; cells.len()];
    let mut stack = Vec::new();
    let mut region = Vec::new();

    for seed in 0..cells.len() {
        if visited[seed] || cells[seed] != OBSTACLE {
            continue;
        }

        region.clear();
        visited[seed] = true;
        stack.push(seed);
        while let Some(i) = stack.pop() {
            region.push(i);
            let at = PixelCoord::new((i % width) as i32, (i / width) as i32);
            for n in at.neighbors_8() {
                if n.x < 0 || n.y < 0 || n.x as usize >= width || n.y as usize >= height {
                    continue;
                }
                let j = n.y as usize * width + n.x as usize;
                if !visited[j] && cells[j] == OBSTACLE {
                    visited[j] = true;
                    stack.push(j);
                }
            }
        }

        if region.len() < min_area {
            for &i in &region {
                cells[i] = FREE;
            }
        }
    }

    OccupancyGrid::from_cells(width, height, cells)
}
