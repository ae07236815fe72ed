//! Greedy waypoint reduction.

use crate::core::PixelCoord;

use super::PathFinder;

impl PathFinder<'_> {
    /// Compress a path to the minimal waypoints the grid allows.
    ///
    /// Forward scan: from the current anchor, probe line of sight to
    /// progressively farther points and jump to the farthest one still
    /// directly reachable; when nothing farther is reachable, step to
    /// the next point. First and last points are always preserved, and
    /// every consecutive output pair has clear line of sight. Inputs
    /// shorter than 3 points pass through unchanged.
    pub fn optimize_path(&self, path: &[PixelCoord]) -> Vec<PixelCoord> {
        if path.len() < 3 {
            return path.to_vec();
        }

        let mut optimized = vec![path[0]];
        let mut i = 0;
        while i < path.len() - 1 {
            let mut j = i + 1;
            while j < path.len() && self.line_of_sight(path[i], path[j]) {
                j += 1;
            }

            if j - 1 > i {
                optimized.push(path[j - 1]);
                i = j - 1;
            } else {
                optimized.push(path[i + 1]);
                i += 1;
            }
        }

        if optimized.last() != path.last() {
            optimized.push(*path.last().unwrap());
        }
        optimized
    }
}

/// Drop interior waypoints that continue the previous step direction.
///
/// Reduction for orthogonal paths: unlike line-of-sight shortcutting it
/// never introduces a new segment direction, so an elbow stays an
/// elbow. Inputs shorter than 3 points pass through unchanged.
pub fn collapse_collinear(path: &[PixelCoord]) -> Vec<PixelCoord> {
    if path.len() < 3 {
        return path.to_vec();
    }

    let mut out = vec![path[0]];
    for i in 1..path.len() - 1 {
        let prev = path[i] - path[i - 1];
        let next = path[i + 1] - path[i];
        if prev != next {
            out.push(path[i]);
        }
    }
    out.push(*path.last().unwrap());
    out
}
