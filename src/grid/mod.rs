//! Occupancy grid storage.
//!
//! The grid is a byte raster with the same shape as the analyzed image:
//! 255 marks a blocked cell, 0 a traversable one. A grid never changes
//! shape after creation; the router replaces its grid wholesale on each
//! analysis rather than patching it in place.

mod occupancy;

pub use occupancy::{OccupancyGrid, FREE, OBSTACLE};
