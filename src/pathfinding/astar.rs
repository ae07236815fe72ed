//! 8-connected grid search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::core::PixelCoord;

use super::PathFinder;

/// Frontier entry ordered for a min-heap on f, with deterministic
/// tie-breaking: lower f, then lower g, then earlier insertion.
#[derive(Clone, Debug)]
struct FrontierNode {
    coord: PixelCoord,
    g: f32,
    f: f32,
    seq: u64,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierNode {}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.g.partial_cmp(&self.g).unwrap_or(Ordering::Equal))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathFinder<'_> {
    /// A* search from `start` to `goal` over the 8-connected grid.
    ///
    /// Axis moves cost 1.0, diagonal moves `diagonal_cost`. The
    /// heuristic is Manhattan distance, which overestimates diagonal
    /// travel under this cost model and so steers expansion toward
    /// axis-aligned runs, the shape schematic wiring wants. Returns an
    /// empty path when start or goal is blocked (out-of-range counts as
    /// blocked) or the frontier empties without reaching the goal.
    pub fn astar(&self, start: PixelCoord, goal: PixelCoord) -> Vec<PixelCoord> {
        if !self.grid().is_free(start) || !self.grid().is_free(goal) {
            debug!(
                "[AStar] blocked endpoint: start=({},{}) goal=({},{})",
                start.x, start.y, goal.x, goal.y
            );
            return Vec::new();
        }

        let mut open = BinaryHeap::new();
        let mut came_from: HashMap<PixelCoord, PixelCoord> = HashMap::new();
        let mut g_scores: HashMap<PixelCoord, f32> = HashMap::new();
        let mut closed: HashSet<PixelCoord> = HashSet::new();
        let mut seq = 0u64;

        g_scores.insert(start, 0.0);
        open.push(FrontierNode {
            coord: start,
            g: 0.0,
            f: self.heuristic(start, goal),
            seq,
        });

        let mut expanded = 0usize;
        while let Some(current) = open.pop() {
            if current.coord == goal {
                trace!(
                    "[AStar] reached goal after {} expansions, cost={:.2}",
                    expanded,
                    current.g
                );
                return reconstruct_path(&came_from, goal);
            }

            if !closed.insert(current.coord) {
                continue;
            }
            expanded += 1;

            for neighbor in current.coord.neighbors_8() {
                if closed.contains(&neighbor) || !self.grid().is_free(neighbor) {
                    continue;
                }

                let delta = neighbor - current.coord;
                let step_cost = if delta.x != 0 && delta.y != 0 {
                    self.config.diagonal_cost
                } else {
                    1.0
                };
                let tentative = g_scores[&current.coord] + step_cost;

                let known = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative < known {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative);
                    seq += 1;
                    open.push(FrontierNode {
                        coord: neighbor,
                        g: tentative,
                        f: tentative + self.heuristic(neighbor, goal),
                        seq,
                    });
                }
            }
        }

        debug!("[AStar] no route after {} expansions", expanded);
        Vec::new()
    }

    fn heuristic(&self, from: PixelCoord, to: PixelCoord) -> f32 {
        from.manhattan_distance(&to) as f32
    }
}

/// Follow parent links from the goal back to the start, then reverse.
fn reconstruct_path(
    came_from: &HashMap<PixelCoord, PixelCoord>,
    goal: PixelCoord,
) -> Vec<PixelCoord> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(current);
        current = prev;
    }
    path.push(current);
    path.reverse();
    path
}
