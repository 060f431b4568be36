//! Push button that reports clicks to its parent.

use arcgauge_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Brick, BrickAssertion, BrickVerification, Canvas, Color, Constraints, Event, Key,
    Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Button widget with a text label.
///
/// A click is a press followed by a release inside the bounds, by mouse or
/// touch, or Enter/Space released while the button holds focus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    label: String,
    /// Background color
    background: Color,
    /// Background color while pressed
    background_pressed: Color,
    /// Label color
    text_color: Color,
    /// Padding around the label
    padding: f32,
    /// Font size
    font_size: f32,
    /// Whether the button ignores input
    disabled: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Current pressed state
    #[serde(skip)]
    pressed: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

/// Message emitted when a button is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClicked;

impl Button {
    /// Create a new button with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background: Color::from_argb(0xff_62_00_ee),
            background_pressed: Color::from_argb(0xff_37_00_b3),
            text_color: Color::WHITE,
            padding: 12.0,
            font_size: 14.0,
            disabled: false,
            test_id_value: None,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set pressed background color.
    #[must_use]
    pub const fn background_pressed(mut self, color: Color) -> Self {
        self.background_pressed = color;
        self
    }

    /// Set label color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set padding.
    #[must_use]
    pub const fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the label.
    #[must_use]
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Whether the button is currently held down.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the button ignores input.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn current_background(&self) -> Color {
        if self.disabled {
            let gray = (self.background.r + self.background.g + self.background.b) / 3.0;
            Color::rgb(gray, gray, gray)
        } else if self.pressed {
            self.background_pressed
        } else {
            self.background
        }
    }

    // Rough metrics, no font shaping available here.
    fn estimate_text_size(&self) -> Size {
        let width = self.label.chars().count() as f32 * self.font_size * 0.6;
        Size::new(width, self.font_size * 1.2)
    }

    fn press_at(&mut self, position: &Point) {
        if self.bounds.contains_point(position) {
            self.pressed = true;
        }
    }

    fn release_at(&mut self, position: &Point) -> Option<Box<dyn Any + Send>> {
        let was_pressed = std::mem::take(&mut self.pressed);
        if was_pressed && self.bounds.contains_point(position) {
            Some(Box::new(ButtonClicked))
        } else {
            None
        }
    }
}

impl Brick for Button {
    fn brick_name(&self) -> &'static str {
        "button"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        static ASSERTIONS: &[BrickAssertion] = &[BrickAssertion::TextVisible];
        ASSERTIONS
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::default();
        verification.check(
            BrickAssertion::TextVisible,
            !self.label.trim().is_empty(),
            "button label is empty",
        );
        verification
    }
}

impl Widget for Button {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let text = self.estimate_text_size();
        constraints.constrain(Size::new(
            self.padding.mul_add(2.0, text.width),
            self.padding.mul_add(2.0, text.height),
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.current_background());

        let text = self.estimate_text_size();
        let position = Point::new(
            self.bounds.x + (self.bounds.width - text.width) / 2.0,
            self.bounds.y + (self.bounds.height - text.height) / 2.0,
        );
        let style = TextStyle {
            size: self.font_size,
            color: if self.disabled {
                Color::rgb(0.7, 0.7, 0.7)
            } else {
                self.text_color
            },
            weight: FontWeight::Medium,
            ..Default::default()
        };
        canvas.draw_text(&self.label, position, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseDown { position } | Event::TouchStart { position } => {
                self.press_at(position);
                None
            }
            Event::MouseUp { position } | Event::TouchEnd { position } => self.release_at(position),
            Event::KeyDown {
                key: Key::Enter | Key::Space,
            } => {
                self.pressed = true;
                None
            }
            Event::KeyUp {
                key: Key::Enter | Key::Space,
            } => {
                self.pressed = false;
                Some(Box::new(ButtonClicked))
            }
        }
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
