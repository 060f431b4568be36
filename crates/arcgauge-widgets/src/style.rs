//! Style configuration for the arc gauge.

use arcgauge_core::Color;
use serde::{Deserialize, Serialize};

/// Default stroke width of the arc, in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 20.0;

/// Gradient stop positions, fixed for every gauge.
pub const COLOR_STOPS: [f32; 3] = [0.0, 0.3, 0.5];

/// Visual configuration of an [`ArcProgressBar`](crate::ArcProgressBar).
///
/// Values are not validated: a non-positive stroke width or a transparent
/// color is handed to the canvas unchanged.
///
/// The default gradient colors are opaque red, green and blue. Bare
/// `0xRRGGBB` literals read as ARGB carry alpha 0 (so `Color::from_argb(0xff0000)`
/// is fully transparent); set such colors explicitly to get an invisible
/// foreground arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArcStyle {
    /// Stroke width of both arcs
    pub stroke_width: f32,
    /// Color of the unfilled track
    pub background_color: Color,
    /// Fill color of the pointer triangle
    pub pointer_color: Color,
    /// Gradient color at the arc start
    pub start_color: Color,
    /// Gradient color at the middle stop
    pub center_color: Color,
    /// Gradient color at the last stop
    pub end_color: Color,
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            background_color: Color::LIGHT_GRAY,
            pointer_color: Color::BLACK,
            start_color: Color::RED,
            center_color: Color::GREEN,
            end_color: Color::BLUE,
        }
    }
}

impl ArcStyle {
    /// Set the stroke width.
    #[must_use]
    pub const fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the track color.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the pointer color.
    #[must_use]
    pub const fn pointer_color(mut self, color: Color) -> Self {
        self.pointer_color = color;
        self
    }

    /// Set the three gradient colors.
    #[must_use]
    pub const fn gradient(mut self, start: Color, center: Color, end: Color) -> Self {
        self.start_color = start;
        self.center_color = center;
        self.end_color = end;
        self
    }

    /// Gradient colors in stop order.
    #[must_use]
    pub const fn gradient_colors(&self) -> [Color; 3] {
        [self.start_color, self.center_color, self.end_color]
    }
}
