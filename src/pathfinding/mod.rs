//! Route search over one occupancy grid.
//!
//! [`PathFinder`] borrows a single immutable grid for its lifetime and
//! offers the search operations of the pipeline:
//!
//! - [`PathFinder::line_of_sight`]: integer Bresenham walk
//! - [`PathFinder::astar`]: 8-connected A* with an orthogonal bias
//! - [`PathFinder::manhattan_route`]: two-leg elbow candidates
//! - [`PathFinder::optimize_path`]: greedy waypoint reduction
//! - [`PathFinder::find_best_path`]: strategy selection plus optimization
//!
//! Every operation reports an unreachable goal as an empty path.

mod astar;
mod elbow;
mod los;
mod optimize;

pub use los::BresenhamLine;
pub use optimize::collapse_collinear;

use crate::core::PixelCoord;
use crate::grid::OccupancyGrid;
use log::debug;

/// Grid search tuning
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Cost multiplier for diagonal moves (sqrt(2))
    pub diagonal_cost: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diagonal_cost: std::f32::consts::SQRT_2,
        }
    }
}

/// Pathfinder bound to one occupancy grid
pub struct PathFinder<'a> {
    grid: &'a OccupancyGrid,
    config: SearchConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a pathfinder with default search settings
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    /// Create a pathfinder with explicit search settings
    pub fn with_config(grid: &'a OccupancyGrid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// The grid this finder routes against
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        self.grid
    }

    /// Find a route from `start` to `goal` and reduce it to waypoints.
    ///
    /// With `prefer_manhattan`, the elbow router runs first and the grid
    /// search only fires when both elbow candidates are blocked;
    /// otherwise the grid search runs directly. Elbow results are
    /// reduced by [`collapse_collinear`] (a line-of-sight shortcut
    /// would replace the elbow with a diagonal); grid search results go
    /// through [`optimize_path`](Self::optimize_path). Empty means no
    /// route exists under either strategy.
    pub fn find_best_path(
        &self,
        start: PixelCoord,
        goal: PixelCoord,
        prefer_manhattan: bool,
    ) -> Vec<PixelCoord> {
        if prefer_manhattan {
            let elbow = self.manhattan_route(start, goal);
            if !elbow.is_empty() {
                return collapse_collinear(&elbow);
            }
            debug!(
                "[PathFinder] elbow blocked ({},{})->({},{}), falling back to grid search",
                start.x, start.y, goal.x, goal.y
            );
        }

        let path = self.astar(start, goal);
        if path.is_empty() {
            path
        } else {
            self.optimize_path(&path)
        }
    }
}
