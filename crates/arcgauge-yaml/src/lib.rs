//! YAML style manifests for arcgauge.
//!
//! A manifest is a flat document of optional keys:
//!
//! ```yaml
//! strokeWidth: 24
//! backgroundColor: "#d3d3d3"
//! pointerColor: "#000000"
//! startColor: "#ff0000"
//! centerColor: "#00ff00"
//! endColor: "#0000ff"
//! max: 100
//! size: 300
//! animationDurationMs: 1000
//! easing: accelerate-decelerate
//! ```

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::{GaugeConfig, GaugeManifest, DEFAULT_SIZE};
