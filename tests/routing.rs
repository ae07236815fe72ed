//! End-to-end routing properties over synthetic grids.
//!
//! Exercises the path finder against hand-built occupancy grids:
//! reachability, obstacle avoidance, waypoint reduction guarantees,
//! and reproducibility.

use tantu_route::{OccupancyGrid, PathFinder, PixelCoord};

/// 100x100 grid with a filled rectangular component at (30,30)-(70,40).
fn grid_with_block() -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(100, 100);
    grid.fill_rect(30, 30, 70, 40);
    grid
}

#[test]
fn open_grid_manhattan_route_is_a_single_elbow() {
    let grid = OccupancyGrid::new(100, 100);
    let finder = PathFinder::new(&grid);

    let path = finder.find_best_path(PixelCoord::new(10, 10), PixelCoord::new(90, 90), true);

    assert_eq!(path.first(), Some(&PixelCoord::new(10, 10)));
    assert_eq!(path.last(), Some(&PixelCoord::new(90, 90)));
    // Exactly one turn: two orthogonal segments meeting at one corner.
    assert_eq!(path.len(), 3);
    let corner = path[1];
    assert!(corner == PixelCoord::new(90, 10) || corner == PixelCoord::new(10, 90));
}

#[test]
fn astar_route_around_block_stays_on_free_cells() {
    let grid = grid_with_block();
    let finder = PathFinder::new(&grid);

    let path = finder.find_best_path(PixelCoord::new(10, 10), PixelCoord::new(90, 90), false);

    assert!(!path.is_empty());
    assert_eq!(path.first(), Some(&PixelCoord::new(10, 10)));
    assert_eq!(path.last(), Some(&PixelCoord::new(90, 90)));
    for pair in path.windows(2) {
        assert!(finder.line_of_sight(pair[0], pair[1]));
    }
}

#[test]
fn manhattan_route_never_touches_obstacles() {
    let grid = grid_with_block();
    let finder = PathFinder::new(&grid);

    for goal in [
        PixelCoord::new(90, 90),
        PixelCoord::new(90, 35), // forces a candidate through the block
        PixelCoord::new(50, 90),
        PixelCoord::new(50, 20),
    ] {
        let path = finder.manhattan_route(PixelCoord::new(10, 10), goal);
        for p in &path {
            assert!(grid.is_free(*p), "touched obstacle at ({},{})", p.x, p.y);
        }
    }
}

#[test]
fn reachable_pair_always_routes() {
    let grid = grid_with_block();
    let finder = PathFinder::new(&grid);

    // Both styles reach a goal on the far side of the component.
    for prefer_manhattan in [true, false] {
        let path =
            finder.find_best_path(PixelCoord::new(10, 35), PixelCoord::new(90, 35), prefer_manhattan);
        assert!(!path.is_empty());
        assert_eq!(path.first(), Some(&PixelCoord::new(10, 35)));
        assert_eq!(path.last(), Some(&PixelCoord::new(90, 35)));
    }
}

#[test]
fn enclosed_goal_reports_empty_not_panic() {
    let mut grid = OccupancyGrid::new(100, 100);
    // Seal the goal in a box.
    grid.fill_rect(58, 58, 66, 58);
    grid.fill_rect(58, 66, 66, 66);
    grid.fill_rect(58, 59, 58, 65);
    grid.fill_rect(66, 59, 66, 65);
    let finder = PathFinder::new(&grid);

    for prefer_manhattan in [true, false] {
        let path =
            finder.find_best_path(PixelCoord::new(5, 5), PixelCoord::new(62, 62), prefer_manhattan);
        assert!(path.is_empty());
    }
}

#[test]
fn optimize_output_has_clear_sight_and_is_idempotent() {
    let grid = grid_with_block();
    let finder = PathFinder::new(&grid);

    let raw = finder.astar(PixelCoord::new(10, 36), PixelCoord::new(90, 36));
    assert!(!raw.is_empty());

    let once = finder.optimize_path(&raw);
    assert!(once.len() <= raw.len());
    assert_eq!(once.first(), raw.first());
    assert_eq!(once.last(), raw.last());
    for pair in once.windows(2) {
        assert!(finder.line_of_sight(pair[0], pair[1]));
    }

    let twice = finder.optimize_path(&once);
    assert_eq!(once, twice);
}

#[test]
fn search_results_are_reproducible() {
    let grid = grid_with_block();
    let finder = PathFinder::new(&grid);

    let first = finder.find_best_path(PixelCoord::new(10, 10), PixelCoord::new(90, 90), false);
    for _ in 0..3 {
        let again =
            finder.find_best_path(PixelCoord::new(10, 10), PixelCoord::new(90, 90), false);
        assert_eq!(first, again);
    }
}

#[test]
fn out_of_range_endpoints_route_nowhere() {
    let grid = OccupancyGrid::new(50, 50);
    let finder = PathFinder::new(&grid);

    for prefer_manhattan in [true, false] {
        assert!(finder
            .find_best_path(PixelCoord::new(-5, 10), PixelCoord::new(20, 20), prefer_manhattan)
            .is_empty());
        assert!(finder
            .find_best_path(PixelCoord::new(10, 10), PixelCoord::new(20, 200), prefer_manhattan)
            .is_empty());
    }
}
