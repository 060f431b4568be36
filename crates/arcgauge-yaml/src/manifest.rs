//! Gauge manifest document and its resolved form.

use crate::error::ManifestError;
use arcgauge_core::{Color, Easing, DEFAULT_TRANSITION_MS};
use arcgauge_widgets::{arc_progress::DEFAULT_MAX, ArcProgressBar, ArcStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default side of the square gauge, in pixels.
pub const DEFAULT_SIZE: f32 = 300.0;

/// Raw manifest as written in YAML. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GaugeManifest {
    /// Arc stroke width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    /// Track color, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Pointer color, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer_color: Option<String>,
    /// Gradient start color, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_color: Option<String>,
    /// Gradient middle color, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_color: Option<String>,
    /// Gradient end color, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_color: Option<String>,
    /// Upper bound of the progress range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    /// Side of the square gauge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Duration of animated progress changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<u32>,
    /// Easing of animated progress changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

/// A validated manifest with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeConfig {
    /// Gauge style
    pub style: ArcStyle,
    /// Upper bound of the progress range, always positive
    pub max: i32,
    /// Side of the square gauge, always positive
    pub size: f32,
    /// Animation duration
    pub animation_duration_ms: u32,
    /// Animation easing
    pub easing: Easing,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            style: ArcStyle::default(),
            max: DEFAULT_MAX,
            size: DEFAULT_SIZE,
            animation_duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
        }
    }
}

impl GaugeConfig {
    /// Build a gauge configured from this manifest.
    #[must_use]
    pub fn build_gauge(&self) -> ArcProgressBar {
        ArcProgressBar::with_style(self.style.clone())
            .max(self.max)
            .animation_duration(self.animation_duration_ms)
            .easing(self.easing)
    }
}

fn parse_color(field: &str, value: Option<&str>, default: Color) -> Result<Color, ManifestError> {
    value.map_or(Ok(default), |hex| {
        Color::from_hex(hex).map_err(|e| ManifestError::invalid(field, format!("{e}: {hex:?}")))
    })
}

impl GaugeManifest {
    /// Parse a manifest from a YAML string. An empty document is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or has unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = yaml.len(), "read gauge manifest");
        Self::from_yaml(&yaml)
    }

    /// Serialize back to YAML, omitting unset keys.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Validate and fill in defaults.
    ///
    /// Stroke width is taken as-is. Colors must be `#rrggbb` or
    /// `#rrggbbaa`; `max` and `size` must be positive.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidValue`] naming the first bad key.
    pub fn resolve(&self) -> Result<GaugeConfig, ManifestError> {
        let defaults = ArcStyle::default();
        let style = ArcStyle {
            stroke_width: self.stroke_width.unwrap_or(defaults.stroke_width),
            background_color: parse_color(
                "backgroundColor",
                self.background_color.as_deref(),
                defaults.background_color,
            )?,
            pointer_color: parse_color(
                "pointerColor",
                self.pointer_color.as_deref(),
                defaults.pointer_color,
            )?,
            start_color: parse_color(
                "startColor",
                self.start_color.as_deref(),
                defaults.start_color,
            )?,
            center_color: parse_color(
                "centerColor",
                self.center_color.as_deref(),
                defaults.center_color,
            )?,
            end_color: parse_color("endColor", self.end_color.as_deref(), defaults.end_color)?,
        };

        let max = self.max.unwrap_or(DEFAULT_MAX);
        if max <= 0 {
            return Err(ManifestError::invalid(
                "max",
                format!("must be positive, got {max}"),
            ));
        }

        let size = self.size.unwrap_or(DEFAULT_SIZE);
        if !(size.is_finite() && size > 0.0) {
            return Err(ManifestError::invalid(
                "size",
                format!("must be a positive number, got {size}"),
            ));
        }

        Ok(GaugeConfig {
            style,
            max,
            size,
            animation_duration_ms: self.animation_duration_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            easing: self.easing.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Parsing Tests =====

    #[test]
    fn test_empty_manifest_resolves_to_defaults() {
        let manifest = GaugeManifest::from_yaml("").unwrap();
        assert_eq!(manifest, GaugeManifest::default());
        assert_eq!(manifest.resolve().unwrap(), GaugeConfig::default());
    }

    #[test]
    fn test_full_manifest() {
        let yaml = r##"
strokeWidth: 12
backgroundColor: "#202020"
pointerColor: "#ffffff"
startColor: "#00ff00"
centerColor: "#ffff00"
endColor: "#ff0000"
max: 200
size: 480
animationDurationMs: 400
easing: linear
"##;
        let config = GaugeManifest::from_yaml(yaml).unwrap().resolve().unwrap();
        assert_eq!(config.style.stroke_width, 12.0);
        assert_eq!(config.style.pointer_color, Color::WHITE);
        assert_eq!(config.style.start_color, Color::GREEN);
        assert_eq!(config.style.end_color, Color::RED);
        assert_eq!(config.style.background_color.to_hex(), "#202020");
        assert_eq!(config.max, 200);
        assert_eq!(config.size, 480.0);
        assert_eq!(config.animation_duration_ms, 400);
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_partial_manifest_keeps_defaults() {
        let config = GaugeManifest::from_yaml("strokeWidth: 8\n")
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(config.style.stroke_width, 8.0);
        assert_eq!(config.style.background_color, Color::LIGHT_GRAY);
        assert_eq!(config.max, 100);
        assert_eq!(config.easing, Easing::AccelerateDecelerate);
    }

    #[test]
    fn test_easing_kebab_case() {
        let m = GaugeManifest::from_yaml("easing: ease-in-out\n").unwrap();
        assert_eq!(m.easing, Some(Easing::EaseInOut));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GaugeManifest::from_yaml("strokeWidht: 8\n").unwrap_err();
        assert!(matches!(err, ManifestError::Yaml(_)));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(GaugeManifest::from_yaml("max: [1, 2").is_err());
    }

    // ===== Validation Tests =====

    #[test]
    fn test_bad_color_names_field() {
        let err = GaugeManifest::from_yaml("pointerColor: \"#12345\"\n")
            .unwrap()
            .resolve()
            .unwrap_err();
        match err {
            ManifestError::InvalidValue { field, .. } => assert_eq!(field, "pointerColor"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_non_hex_color_rejected() {
        let err = GaugeManifest::from_yaml("endColor: \"#zzzzzz\"\n")
            .unwrap()
            .resolve()
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid value for 'endColor'"));
    }

    #[test]
    fn test_zero_max_rejected() {
        let err = GaugeManifest::from_yaml("max: 0\n")
            .unwrap()
            .resolve()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for 'max': must be positive, got 0"
        );
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = GaugeManifest::from_yaml("size: -1\n")
            .unwrap()
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ManifestError::InvalidValue { ref field, .. } if field == "size"));
    }

    #[test]
    fn test_negative_stroke_passes_through() {
        let config = GaugeManifest::from_yaml("strokeWidth: -4\n")
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(config.style.stroke_width, -4.0);
    }

    // ===== Conversion Tests =====

    #[test]
    fn test_build_gauge() {
        let config = GaugeManifest::from_yaml("max: 50\nanimationDurationMs: 0\n")
            .unwrap()
            .resolve()
            .unwrap();
        let mut gauge = config.build_gauge();
        assert_eq!(gauge.get_max(), 50);
        gauge.set_progress_with_animation(40);
        assert_eq!(gauge.get_progress(), 40);
    }

    #[test]
    fn test_to_yaml_omits_unset() {
        let manifest = GaugeManifest {
            max: Some(10),
            ..GaugeManifest::default()
        };
        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(yaml.trim(), "max: 10");
        assert_eq!(GaugeManifest::from_yaml(&yaml).unwrap(), manifest);
    }

    #[test]
    fn test_from_file_missing() {
        let err = GaugeManifest::from_file("/nonexistent/gauge.yaml").unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn test_from_file_reads() {
        let path = std::env::temp_dir().join(format!("arcgauge-{}.yaml", std::process::id()));
        std::fs::write(&path, "max: 75\n").unwrap();
        let manifest = GaugeManifest::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(manifest.max, Some(75));
    }

    proptest! {
        #[test]
        fn prop_any_rgb_hex_resolves(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let yaml = format!("startColor: \"{hex}\"\n");
            let config = GaugeManifest::from_yaml(&yaml).unwrap().resolve().unwrap();
            prop_assert_eq!(config.style.start_color.to_hex(), hex);
        }

        #[test]
        fn prop_non_positive_max_rejected(max in i32::MIN..=0) {
            let manifest = GaugeManifest { max: Some(max), ..GaugeManifest::default() };
            prop_assert!(manifest.resolve().is_err());
        }
    }
}
