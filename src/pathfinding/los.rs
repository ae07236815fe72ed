//! Line-of-sight testing along rasterized lines.

use crate::core::PixelCoord;

use super::PathFinder;

/// Bresenham line iterator.
///
/// Yields every grid cell on the discrete line from `start` to `end`,
/// both endpoints included. Integer arithmetic only, no gaps.
pub struct BresenhamLine {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i32,
    dy: i32,
    x_step: i32,
    y_step: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    /// Create an iterator over the line from `start` to `end`
    pub fn new(start: PixelCoord, end: PixelCoord) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        Self {
            x: start.x,
            y: start.y,
            end_x: end.x,
            end_y: end.y,
            dx,
            dy,
            x_step: if start.x < end.x { 1 } else { -1 },
            y_step: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = PixelCoord;

    fn next(&mut self) -> Option<PixelCoord> {
        if self.done {
            return None;
        }
        let current = PixelCoord::new(self.x, self.y);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.x_step;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.y_step;
        }
        Some(current)
    }
}

impl PathFinder<'_> {
    /// Is the straight rasterized line from `a` to `b` fully traversable?
    ///
    /// Both endpoints are checked; the first blocked or out-of-range
    /// cell fails the test.
    pub fn line_of_sight(&self, a: PixelCoord, b: PixelCoord) -> bool {
        BresenhamLine::new(a, b).all(|p| self.grid().is_free(p))
    }
}
