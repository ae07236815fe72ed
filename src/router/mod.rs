//! Wire routing orchestration.
//!
//! [`WireRouter`] ties the pipeline together as a two-call API: analyze
//! an image into an obstacle map, then route wires against it. The
//! router owns at most one grid; each analysis replaces it wholesale, so
//! every route query reads one consistent snapshot.

mod stats;

pub use stats::RoutingStats;

use image::{DynamicImage, GrayImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{DetectionSection, RouterConfig};
use crate::core::PixelCoord;
use crate::detect::ObstacleMapBuilder;
use crate::error::{Error, Result};
use crate::grid::OccupancyGrid;
use crate::pathfinding::PathFinder;

/// Wire routing strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingStyle {
    /// Elbow routing with grid-search fallback
    #[default]
    Manhattan,
    /// Grid search directly, no elbow attempt
    AStar,
}

/// Result of one circuit analysis
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    /// Number of blocked cells in the obstacle map
    pub obstacle_pixels: usize,
    /// Number of traversable cells
    pub free_pixels: usize,
    /// Obstacle share of the image in percent, rounded to 2 decimals
    pub coverage_percent: f32,
}

/// Smart wire router over one analyzed circuit image.
pub struct WireRouter {
    config: RouterConfig,
    obstacle_map: Option<OccupancyGrid>,
}

impl WireRouter {
    /// Create a router with default configuration
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create a router with an explicit configuration
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            obstacle_map: None,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Analyze a circuit image into an obstacle map.
    ///
    /// Replaces any previously cached map; routes requested afterwards
    /// run against the new map only.
    pub fn analyze_circuit(&mut self, image: &DynamicImage) -> Result<AnalysisResult> {
        let map = ObstacleMapBuilder::new(self.config.detection.clone()).build(image)?;
        Ok(self.install_map(map))
    }

    /// Analyze a grayscale circuit image into an obstacle map.
    pub fn analyze_circuit_gray(&mut self, gray: &GrayImage) -> Result<AnalysisResult> {
        let map = ObstacleMapBuilder::new(self.config.detection.clone()).build_gray(gray)?;
        Ok(self.install_map(map))
    }

    /// Analyze with detection settings overriding the configuration
    /// for this call only.
    pub fn analyze_circuit_with(
        &mut self,
        image: &DynamicImage,
        settings: &DetectionSection,
    ) -> Result<AnalysisResult> {
        let map = ObstacleMapBuilder::new(settings.clone()).build(image)?;
        Ok(self.install_map(map))
    }

    fn install_map(&mut self, map: OccupancyGrid) -> AnalysisResult {
        let obstacle_pixels = map.obstacle_count();
        let free_pixels = map.cell_count() - obstacle_pixels;
        let coverage = 100.0 * obstacle_pixels as f32 / map.cell_count() as f32;
        let result = AnalysisResult {
            obstacle_pixels,
            free_pixels,
            coverage_percent: (coverage * 100.0).round() / 100.0,
        };

        debug!(
            "[Router] analyzed {}x{}: {} obstacle px, {} free px, {:.2}% covered",
            map.width(),
            map.height(),
            result.obstacle_pixels,
            result.free_pixels,
            result.coverage_percent
        );
        self.obstacle_map = Some(map);
        result
    }

    /// The obstacle map of the last analysis, for overlay rendering
    pub fn obstacle_map(&self) -> Option<&OccupancyGrid> {
        self.obstacle_map.as_ref()
    }

    /// Has a circuit been analyzed?
    pub fn is_analyzed(&self) -> bool {
        self.obstacle_map.is_some()
    }

    /// Route a wire between two points, avoiding obstacles.
    ///
    /// Requires a prior successful [`analyze_circuit`](Self::analyze_circuit);
    /// fails with [`Error::NotAnalyzed`] otherwise. An empty path means
    /// no route exists, which is not an error: callers may retry with
    /// the other style or report "no route".
    pub fn route_wire(
        &self,
        start: PixelCoord,
        goal: PixelCoord,
        style: RoutingStyle,
    ) -> Result<Vec<PixelCoord>> {
        let grid = self.obstacle_map.as_ref().ok_or(Error::NotAnalyzed)?;
        let finder = PathFinder::with_config(grid, self.config.search_config());
        let path = finder.find_best_path(start, goal, style == RoutingStyle::Manhattan);
        debug!(
            "[Router] route ({},{})->({},{}) style={:?}: {} waypoints",
            start.x,
            start.y,
            goal.x,
            goal.y,
            style,
            path.len()
        );
        Ok(path)
    }

    /// Derive statistics for a routed path
    pub fn routing_statistics(&self, path: &[PixelCoord]) -> RoutingStats {
        stats::path_statistics(path)
    }
}

impl Default for WireRouter {
    fn default() -> Self {
        Self::new()
    }
}
