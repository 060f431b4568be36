//! Host screen: a gauge, a speed label and a button that randomizes the gauge.

use arcgauge_core::{
    widget::LayoutResult, Brick, BrickAssertion, BrickVerification, Canvas, Constraints, Event,
    Point, Rect, Size, TypeId, Widget,
};
use arcgauge_widgets::{ArcProgressBar, Button, ButtonClicked, Text};
use arcgauge_yaml::GaugeConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::any::Any;
use tracing::info;

/// Exclusive upper bound of the random target. Assumes the gauge's `max` is 100.
pub const RANDOM_UPPER_BOUND: i32 = 100;

/// Vertical gap between the stacked children.
const SPACING: f32 = 16.0;

/// Message emitted when a click picked a new target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedSelected {
    /// The chosen target
    pub value: i32,
}

/// One gauge, one label and one button stacked vertically.
pub struct HostScreen {
    gauge: ArcProgressBar,
    label: Text,
    button: Button,
    rng: StdRng,
    label_changed: bool,
    bounds: Rect,
}

impl HostScreen {
    /// Create a screen around `gauge` with an OS-seeded random source.
    #[must_use]
    pub fn new(gauge: ArcProgressBar) -> Self {
        Self::with_rng(gauge, StdRng::from_os_rng())
    }

    /// Create a screen with a deterministic random source.
    #[must_use]
    pub fn with_seed(gauge: ArcProgressBar, seed: u64) -> Self {
        Self::with_rng(gauge, StdRng::seed_from_u64(seed))
    }

    /// Create a screen from a resolved manifest.
    #[must_use]
    pub fn from_config(config: &GaugeConfig, seed: Option<u64>) -> Self {
        let gauge = config.build_gauge().accessible_name("Speed");
        match seed {
            Some(seed) => Self::with_seed(gauge, seed),
            None => Self::new(gauge),
        }
    }

    fn with_rng(gauge: ArcProgressBar, rng: StdRng) -> Self {
        Self {
            gauge,
            label: Text::new("Speed: 0").with_test_id("speed-label"),
            button: Button::new("Calculate Speed").with_test_id("calculate-speed"),
            rng,
            label_changed: false,
            bounds: Rect::default(),
        }
    }

    /// The gauge.
    #[must_use]
    pub const fn gauge(&self) -> &ArcProgressBar {
        &self.gauge
    }

    /// Mutable access to the gauge.
    pub fn gauge_mut(&mut self) -> &mut ArcProgressBar {
        &mut self.gauge
    }

    /// The speed label.
    #[must_use]
    pub const fn label(&self) -> &Text {
        &self.label
    }

    /// The randomize button.
    #[must_use]
    pub const fn button(&self) -> &Button {
        &self.button
    }

    /// Center of the button, where a pointer click lands.
    #[must_use]
    pub fn button_center(&self) -> Point {
        self.button.bounds().center()
    }

    /// Pick a random target in `[0, 100)`, animate the gauge toward it and
    /// show it in the label.
    pub fn click(&mut self) -> i32 {
        let value = self.rng.random_range(0..RANDOM_UPPER_BOUND);
        self.gauge.set_progress_with_animation(value);
        self.label.set_content(format!("Speed: {value}"));
        self.label_changed = true;
        info!(speed = value, "new speed target");
        value
    }

    /// Route an input event to the button. Returns the new target when the
    /// event completed a click.
    pub fn handle_event(&mut self, event: &Event) -> Option<i32> {
        self.event(event)
            .and_then(|msg| msg.downcast::<SpeedSelected>().ok())
            .map(|selected| selected.value)
    }

    /// Drive the gauge animation. Returns `true` while it is still running.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.gauge.advance(delta_ms)
    }

    /// Whether anything changed since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        let gauge = self.gauge.take_redraw_request();
        let label = std::mem::take(&mut self.label_changed);
        gauge || label
    }

    fn centered(&self, size: Size, y: f32) -> Rect {
        let x = self.bounds.x + (self.bounds.width - size.width).max(0.0) / 2.0;
        Rect::new(x, y, size.width, size.height)
    }
}

impl Brick for HostScreen {
    fn brick_name(&self) -> &'static str {
        "host_screen"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        static ASSERTIONS: &[BrickAssertion] = &[BrickAssertion::MaxLatencyMs(16)];
        ASSERTIONS
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::default();
        for assertion in self.assertions() {
            verification.check(assertion.clone(), true, "");
        }
        for child in [
            self.gauge.verify(),
            self.label.verify(),
            self.button.verify(),
        ] {
            verification.passed.extend(child.passed);
            verification.failed.extend(child.failed);
        }
        verification
    }
}

impl Widget for HostScreen {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let loose = Constraints::loose(Size::new(constraints.max_width, constraints.max_height));
        let children = [
            self.gauge.measure(loose),
            self.label.measure(loose),
            self.button.measure(loose),
        ];
        let width = children.iter().map(|s| s.width).fold(0.0, f32::max);
        let height = children.iter().map(|s| s.height).sum::<f32>() + SPACING * 2.0;
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let loose = Constraints::loose(bounds.size());

        let measured = self.gauge.measure(loose);
        let side = measured.width.min(measured.height);
        let gauge_rect = self.centered(Size::square(side), bounds.y);
        self.gauge.layout(gauge_rect);

        let label_rect = self.centered(self.label.measure(loose), gauge_rect.bottom() + SPACING);
        self.label.layout(label_rect);

        let button_rect =
            self.centered(self.button.measure(loose), label_rect.bottom() + SPACING);
        self.button.layout(button_rect);

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.gauge.paint(canvas);
        self.label.paint(canvas);
        self.button.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let clicked = self
            .button
            .event(event)
            .is_some_and(|msg| msg.downcast_ref::<ButtonClicked>().is_some());
        if clicked {
            let value = self.click();
            return Some(Box::new(SpeedSelected { value }));
        }
        None
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
