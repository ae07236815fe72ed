//! Obstacle detection configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Obstacle detection settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectionSection {
    /// Side of the stroke-merging dilation element in pixels
    /// (0 disables merging; typical 3-10)
    #[serde(default = "defaults::dilation_size")]
    pub dilation_size: u32,

    /// Mandatory clearance margin around obstacles in pixels
    /// (typical 2-7)
    #[serde(default = "defaults::safety_padding")]
    pub safety_padding: u32,

    /// Drop hairline marks with a 3x3 opening before padding
    #[serde(default)]
    pub remove_thin_strokes: bool,

    /// Drop obstacle regions smaller than this many pixels
    /// (0 keeps everything)
    #[serde(default)]
    pub min_component_area: usize,
}

impl Default for DetectionSection {
    fn default() -> Self {
        Self {
            dilation_size: defaults::dilation_size(),
            safety_padding: defaults::safety_padding(),
            remove_thin_strokes: false,
            min_component_area: 0,
        }
    }
}
