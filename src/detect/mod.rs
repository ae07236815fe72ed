//! Obstacle map construction from circuit sketches.
//!
//! Converts a raster image into an [`OccupancyGrid`](crate::grid::OccupancyGrid)
//! in four passes:
//!
//! - [`binarize`]: adaptive thresholding, dark strokes become foreground
//! - [`dilate`]: merge broken strokes into solid blobs
//! - optional refinement: [`open`] drops hairline marks,
//!   [`remove_small_regions`] drops speckle
//! - a final dilation adds the mandatory clearance margin
//!
//! [`ObstacleMapBuilder`] orchestrates the passes.

mod builder;
mod components;
mod morphology;
mod threshold;

pub use builder::ObstacleMapBuilder;
pub use components::remove_small_regions;
pub use morphology::{dilate, erode, open};
pub use threshold::binarize;
