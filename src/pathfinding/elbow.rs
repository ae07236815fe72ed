//! Two-leg elbow routing.
//!
//! Schematic wiring prefers a single horizontal and a single vertical
//! leg. Both leg orders are tried; a candidate is rejected outright the
//! moment any traversed cell is blocked, never truncated.

use crate::core::PixelCoord;

use super::PathFinder;

impl PathFinder<'_> {
    /// Route with at most one elbow between `start` and `goal`.
    ///
    /// Validates the horizontal-then-vertical and vertical-then-
    /// horizontal candidates cell by cell, endpoints included. Both
    /// valid: the one with fewer waypoints wins (ties go horizontal-
    /// first). Neither valid: returns empty, the caller decides whether
    /// to fall back to the grid search.
    pub fn manhattan_route(&self, start: PixelCoord, goal: PixelCoord) -> Vec<PixelCoord> {
        let horizontal = self.horizontal_then_vertical(start, goal);
        let vertical = self.vertical_then_horizontal(start, goal);

        match (horizontal, vertical) {
            (Some(h), Some(v)) => {
                if h.len() <= v.len() {
                    h
                } else {
                    v
                }
            }
            (Some(h), None) => h,
            (None, Some(v)) => v,
            (None, None) => Vec::new(),
        }
    }

    fn horizontal_then_vertical(
        &self,
        start: PixelCoord,
        goal: PixelCoord,
    ) -> Option<Vec<PixelCoord>> {
        let mut path = Vec::new();

        if start.x != goal.x {
            let step = if goal.x > start.x { 1 } else { -1 };
            let mut x = start.x;
            loop {
                let p = PixelCoord::new(x, start.y);
                if self.grid().is_obstacle(p) {
                    return None;
                }
                path.push(p);
                if x == goal.x {
                    break;
                }
                x += step;
            }
        } else {
            if self.grid().is_obstacle(start) {
                return None;
            }
            path.push(start);
        }

        if start.y != goal.y {
            let step = if goal.y > start.y { 1 } else { -1 };
            let mut y = start.y + step;
            loop {
                let p = PixelCoord::new(goal.x, y);
                if self.grid().is_obstacle(p) {
                    return None;
                }
                path.push(p);
                if y == goal.y {
                    break;
                }
                y += step;
            }
        }

        Some(path)
    }

    fn vertical_then_horizontal(
        &self,
        start: PixelCoord,
        goal: PixelCoord,
    ) -> Option<Vec<PixelCoord>> {
        let mut path = Vec::new();

        if start.y != goal.y {
            let step = if goal.y > start.y { 1 } else { -1 };
            let mut y = start.y;
            loop {
                let p = PixelCoord::new(start.x, y);
                if self.grid().is_obstacle(p) {
                    return None;
                }
                path.push(p);
                if y == goal.y {
                    break;
                }
                y += step;
            }
        } else {
            if self.grid().is_obstacle(start) {
                return None;
            }
            path.push(start);
        }

        if start.x != goal.x {
            let step = if goal.x > start.x { 1 } else { -1 };
            let mut x = start.x + step;
            loop {
                let p = PixelCoord::new(x, goal.y);
                if self.grid().is_obstacle(p) {
                    return None;
                }
                path.push(p);
                if x == goal.x {
                    break;
                }
                x += step;
            }
        }

        Some(path)
    }
}
