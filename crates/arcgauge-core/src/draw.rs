//! Draw commands and paint styles.
//!
//! Every paint pass reduces to these primitives. They are plain data so a
//! backend (or a test) can inspect, serialize, or replay them.

use crate::geometry::normalize_degrees;
use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for lines and arcs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

impl StrokeStyle {
    /// Solid butt-capped stroke of the given color and width.
    #[must_use]
    pub const fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// 2D affine transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Rotation by `degrees` about `pivot`.
    #[must_use]
    pub fn rotate_about(degrees: f32, pivot: Point) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            matrix: [
                cos,
                sin,
                -sin,
                cos,
                pivot.x - cos * pivot.x + sin * pivot.y,
                pivot.y - sin * pivot.x - cos * pivot.y,
            ],
        }
    }

    /// Apply the transform to a point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }
}

/// Angular gradient around a center point.
///
/// Position 0.0 sits at `rotation` degrees and positions grow clockwise; 1.0 is
/// a full turn. Angles before the first stop take the first color, angles past
/// the last stop take the last color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGradient {
    /// Gradient center
    pub center: Point,
    /// Colors, one per stop
    pub colors: Vec<Color>,
    /// Stop positions in [0, 1]; empty means evenly spaced
    pub stops: Vec<f32>,
    /// Rotation of the gradient's zero angle, in degrees
    pub rotation: f32,
}

impl SweepGradient {
    /// Create an unrotated gradient.
    #[must_use]
    pub fn new(center: Point, colors: Vec<Color>, stops: Vec<f32>) -> Self {
        Self {
            center,
            colors,
            stops,
            rotation: 0.0,
        }
    }

    /// Rotate the gradient's local frame about its center.
    #[must_use]
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// The local transform equivalent to `rotation`.
    #[must_use]
    pub fn local_transform(&self) -> Transform2D {
        Transform2D::rotate_about(self.rotation, self.center)
    }

    fn stop(&self, i: usize) -> f32 {
        match self.stops.get(i) {
            Some(&s) => s,
            None if self.colors.len() > 1 => i as f32 / (self.colors.len() - 1) as f32,
            None => 0.0,
        }
    }

    /// Color at the absolute angle `degrees` around the center.
    #[must_use]
    pub fn color_at(&self, degrees: f32) -> Color {
        let Some(&first) = self.colors.first() else {
            return Color::TRANSPARENT;
        };
        let t = normalize_degrees(degrees - self.rotation) / 360.0;

        let count = if self.stops.is_empty() {
            self.colors.len()
        } else {
            self.colors.len().min(self.stops.len())
        };
        if count < 2 || t <= self.stop(0) {
            return first;
        }

        for i in 1..count {
            let (lo, hi) = (self.stop(i - 1), self.stop(i));
            if t <= hi {
                let span = hi - lo;
                let local = if span > 0.0 { (t - lo) / span } else { 1.0 };
                return self.colors[i - 1].lerp(&self.colors[i], local);
            }
        }
        self.colors[count - 1]
    }
}

/// A single primitive paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill color
        fill: Color,
    },
    /// Stroked arc with a solid color
    Arc {
        /// Oval the arc is inscribed in
        oval: Rect,
        /// Start angle in degrees
        start_angle: f32,
        /// Sweep in degrees, clockwise
        sweep_angle: f32,
        /// Stroke style
        style: StrokeStyle,
    },
    /// Stroked arc shaded by a sweep gradient
    GradientArc {
        /// Oval the arc is inscribed in
        oval: Rect,
        /// Start angle in degrees
        start_angle: f32,
        /// Sweep in degrees, clockwise
        sweep_angle: f32,
        /// Stroke width
        width: f32,
        /// Gradient shader
        gradient: SweepGradient,
    },
    /// Straight line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        style: StrokeStyle,
    },
    /// Filled closed polygon
    Polygon {
        /// Vertices in order
        points: Vec<Point>,
        /// Fill color
        fill: Color,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Top-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Short name of the primitive, for summaries and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Arc { .. } => "arc",
            Self::GradientArc { .. } => "gradient_arc",
            Self::Line { .. } => "line",
            Self::Polygon { .. } => "polygon",
            Self::Text { .. } => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_gradient() -> SweepGradient {
        SweepGradient::new(
            Point::new(150.0, 150.0),
            vec![Color::RED, Color::GREEN, Color::BLUE],
            vec![0.0, 0.3, 0.5],
        )
    }

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-3 && (a.g - b.g).abs() < 1e-3 && (a.b - b.b).abs() < 1e-3
    }

    #[test]
    fn test_transform_rotate_about_keeps_pivot() {
        let pivot = Point::new(150.0, 150.0);
        let t = Transform2D::rotate_about(135.0, pivot);
        let p = t.apply(pivot);
        assert!((p.x - 150.0).abs() < 1e-3);
        assert!((p.y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_transform_rotate_about_quarter_turn() {
        let t = Transform2D::rotate_about(90.0, Point::ORIGIN);
        let p = t.apply(Point::new(1.0, 0.0));
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_stops() {
        let g = rgb_gradient();
        assert!(close(g.color_at(0.0), Color::RED));
        assert!(close(g.color_at(108.0), Color::GREEN)); // 0.3 turn
        assert!(close(g.color_at(180.0), Color::BLUE)); // 0.5 turn
        assert!(close(g.color_at(300.0), Color::BLUE)); // past last stop
    }

    #[test]
    fn test_gradient_interpolates_between_stops() {
        let g = rgb_gradient();
        let mid = g.color_at(54.0); // 0.15 turn, halfway red -> green
        assert!((mid.r - 0.5).abs() < 1e-3);
        assert!((mid.g - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_gradient_rotation_moves_zero_angle() {
        let g = rgb_gradient().rotated(135.0);
        assert!(close(g.color_at(135.0), Color::RED));
        assert!(close(g.color_at(135.0 + 180.0), Color::BLUE));
    }

    #[test]
    fn test_gradient_even_spacing_without_stops() {
        let g = SweepGradient::new(Point::ORIGIN, vec![Color::BLACK, Color::WHITE], vec![]);
        let mid = g.color_at(180.0);
        assert!((mid.r - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_gradient_empty_is_transparent() {
        let g = SweepGradient::new(Point::ORIGIN, vec![], vec![]);
        assert_eq!(g.color_at(10.0), Color::TRANSPARENT);
    }

    #[test]
    fn test_draw_command_kind() {
        let cmd = DrawCommand::Polygon {
            points: vec![],
            fill: Color::BLACK,
        };
        assert_eq!(cmd.kind(), "polygon");
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::Line {
            from: Point::ORIGIN,
            to: Point::new(1.0, 1.0),
            style: StrokeStyle::solid(Color::BLACK, 4.0),
        };
        let json = serde_json::to_string(&cmd).expect("serialize");
        assert!(json.contains("\"Line\""));
        let back: DrawCommand = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cmd);
    }
}
