//! Configuration loading for the wire router.
//!
//! All tunables load from a single YAML file; every field has a default
//! so a partial (or absent) file still yields a working configuration.

mod defaults;
mod detection;
mod routing;
mod tantu;

pub use detection::DetectionSection;
pub use routing::RoutingSection;
pub use tantu::RouterConfig;
