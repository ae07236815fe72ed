//! Routing configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::router::RoutingStyle;

/// Wire routing settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutingSection {
    /// Routing style used when the caller does not pick one
    #[serde(default)]
    pub style: RoutingStyle,

    /// Cost multiplier for diagonal moves in the grid search (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,
}

impl Default for RoutingSection {
    fn default() -> Self {
        Self {
            style: RoutingStyle::default(),
            diagonal_cost: defaults::diagonal_cost(),
        }
    }
}
