//! # Tantu-Route: Wire Routing for Hand-Drawn Circuit Sketches
//!
//! Turns a raster image of a hand-drawn circuit diagram into a binary
//! occupancy grid marking where components sit, then routes wires
//! between pixels while avoiding those regions, preferring the
//! orthogonal elbow routes of schematic wiring.
//!
//! ## Features
//!
//! - **Generic obstacle detection**: adaptive thresholding plus
//!   morphological dilation turns thin hand-drawn strokes into solid
//!   no-entry blobs, no symbol recognition required
//! - **Elbow-first routing**: two-leg Manhattan candidates with an
//!   8-connected A* fallback, biased toward orthogonal runs
//! - **Waypoint reduction**: each returned path is compressed to a
//!   minimal list whose consecutive waypoints have provably clear line
//!   of sight
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tantu_route::{PixelCoord, RoutingStyle, WireRouter};
//!
//! let image = image::open("circuit.png").expect("load sketch");
//!
//! let mut router = WireRouter::new();
//! let analysis = router.analyze_circuit(&image).expect("analyze");
//! println!("{:.2}% of the sheet is blocked", analysis.coverage_percent);
//!
//! let path = router
//!     .route_wire(
//!         PixelCoord::new(40, 60),
//!         PixelCoord::new(420, 310),
//!         RoutingStyle::Manhattan,
//!     )
//!     .expect("analyzed above");
//! if path.is_empty() {
//!     println!("no route");
//! } else {
//!     let stats = router.routing_statistics(&path);
//!     println!("{} waypoints, {} turns, {:.2} px", stats.waypoints, stats.turns, stats.length);
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌───────────────┐
//!  │ Sketch image │ ──► │ ObstacleMap    │ ──► │ OccupancyGrid │
//!  │ (image crate)│     │ Builder        │     │ (255/0 plane) │
//!  └──────────────┘     │ threshold +    │     └───────┬───────┘
//!                       │ dilate + pad   │             │
//!                       └────────────────┘             ▼
//!                       ┌────────────────┐     ┌───────────────┐
//!  waypoints + stats ◄──│ WireRouter     │ ◄── │ PathFinder    │
//!                       │ analyze/route  │     │ elbow │ A*    │
//!                       └────────────────┘     │ optimize      │
//!                                              └───────────────┘
//! ```
//!
//! ## Execution model
//!
//! Everything is synchronous and single-threaded; every call runs to
//! completion in the caller's context. The router owns at most one
//! grid and replaces it wholesale per analysis, and the borrow checker
//! keeps route queries (`&self`) and re-analysis (`&mut self`) from
//! overlapping, so a query always reads one consistent snapshot.

pub mod config;
pub mod core;
pub mod detect;
pub mod error;
pub mod grid;
pub mod pathfinding;
pub mod router;

// Re-export main types at crate root
pub use config::RouterConfig;
pub use core::PixelCoord;
pub use detect::ObstacleMapBuilder;
pub use error::{Error, Result};
pub use grid::OccupancyGrid;
pub use pathfinding::{PathFinder, SearchConfig};
pub use router::{AnalysisResult, RoutingStats, RoutingStyle, WireRouter};
