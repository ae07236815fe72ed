//! Derived path statistics.

use crate::core::PixelCoord;

/// Read-only summary of a routed path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoutingStats {
    /// Total length: sum of Euclidean segment lengths, rounded to 2
    /// decimals
    pub length: f32,
    /// Number of segments between consecutive waypoints
    pub segments: usize,
    /// Number of horizontal/vertical direction changes
    pub turns: usize,
    /// Number of waypoints
    pub waypoints: usize,
}

/// Derive statistics for a path.
///
/// A turn is counted between segment `i-1` and segment `i` whenever an
/// axis that was zero-delta becomes non-zero or vice versa (the
/// horizontal-to-vertical transitions of schematic wiring). Paths
/// shorter than 2 points report all-zero statistics.
pub(super) fn path_statistics(path: &[PixelCoord]) -> RoutingStats {
    if path.len() < 2 {
        return RoutingStats::default();
    }

    let mut length = 0.0f32;
    let mut turns = 0;
    for i in 0..path.len() - 1 {
        length += path[i].distance(&path[i + 1]);

        if i > 0 {
            let prev = path[i] - path[i - 1];
            let curr = path[i + 1] - path[i];
            if (prev.x != 0 && curr.x == 0)
                || (prev.x == 0 && curr.x != 0)
                || (prev.y != 0 && curr.y == 0)
                || (prev.y == 0 && curr.y != 0)
            {
                turns += 1;
            }
        }
    }

    RoutingStats {
        length: (length * 100.0).round() / 100.0,
        segments: path.len() - 1,
        turns,
        waypoints: path.len(),
    }
}
