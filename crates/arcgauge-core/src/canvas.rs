//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, StrokeStyle, SweepGradient};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a real backend)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Count recorded commands of one kind (see [`DrawCommand::kind`]).
    #[must_use]
    pub fn count_kind(&self, kind: &str) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            fill: color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            style: style.clone(),
        });
    }

    fn stroke_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Arc {
            oval,
            start_angle,
            sweep_angle,
            style: style.clone(),
        });
    }

    fn stroke_gradient_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        width: f32,
        gradient: &SweepGradient,
    ) {
        self.commands.push(DrawCommand::GradientArc {
            oval,
            start_angle,
            sweep_angle,
            width,
            gradient: gradient.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill: color,
        });
    }
}
