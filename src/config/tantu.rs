//! Main RouterConfig and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pathfinding::SearchConfig;

use super::detection::DetectionSection;
use super::routing::RoutingSection;

/// Full router configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RouterConfig {
    /// Obstacle detection settings
    #[serde(default)]
    pub detection: DetectionSection,

    /// Routing settings
    #[serde(default)]
    pub routing: RoutingSection,
}

impl RouterConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Convert to a SearchConfig for the path finder
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            diagonal_cost: self.routing.diagonal_cost,
        }
    }
}
