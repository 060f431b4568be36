//! Arc-shaped progress gauge.
//!
//! A 270° track with a gradient-filled foreground arc, eleven graduation
//! ticks and a triangular pointer. Progress is an integer in `[.., max]`;
//! animated changes run through a single [`Transition`] that the host drives
//! with [`ArcProgressBar::advance`].

use crate::arc_geometry::{ArcGeometry, START_ANGLE, SWEEP_RANGE, TICK_STROKE_WIDTH};
use crate::style::{ArcStyle, COLOR_STOPS};
use arcgauge_core::{
    widget::{AccessibleRole, LayoutResult},
    Brick, BrickAssertion, BrickVerification, Canvas, Color, Constraints, Easing,
    Event, Rect, Size, StrokeStyle, SweepGradient, Transition, TypeId, Widget,
    DEFAULT_TRANSITION_MS,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::{debug, trace, warn};

/// Default upper bound of the progress range.
pub const DEFAULT_MAX: i32 = 100;

/// Side of the square the gauge asks for when unconstrained.
pub const PREFERRED_SIZE: f32 = 300.0;

/// Arc progress gauge widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcProgressBar {
    /// Current progress
    progress: i32,
    /// Upper bound of the range
    max: i32,
    /// Visual style
    style: ArcStyle,
    /// Duration of animated changes
    animation_duration_ms: u32,
    /// Curve of animated changes
    easing: Easing,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// In-flight animation, if any
    #[serde(skip)]
    transition: Option<Transition>,
    /// Set by every mutation, cleared by the host
    #[serde(skip)]
    redraw_requested: bool,
    /// Current layout bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for ArcProgressBar {
    fn default() -> Self {
        Self {
            progress: 0,
            max: DEFAULT_MAX,
            style: ArcStyle::default(),
            animation_duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
            accessible_name_value: None,
            test_id_value: None,
            transition: None,
            redraw_requested: false,
            bounds: Rect::default(),
        }
    }
}

impl ArcProgressBar {
    /// Create a gauge with the default style, `progress = 0` and `max = 100`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gauge with the given style.
    #[must_use]
    pub fn with_style(style: ArcStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set the initial progress (same clamping as [`Self::set_progress`]).
    #[must_use]
    pub fn progress(mut self, value: i32) -> Self {
        self.progress = value.min(self.max);
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub const fn max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }

    /// Replace the style.
    #[must_use]
    pub fn style(mut self, style: ArcStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the duration used by [`Self::set_progress_with_animation`].
    #[must_use]
    pub const fn animation_duration(mut self, duration_ms: u32) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    /// Set the easing used by [`Self::set_progress_with_animation`].
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Re-apply a style after construction.
    pub fn configure(&mut self, style: ArcStyle) {
        self.style = style;
        self.redraw_requested = true;
    }

    /// Set progress to `min(value, max)` and request a redraw.
    ///
    /// There is no lower bound: negative values are stored as given.
    pub fn set_progress(&mut self, value: i32) {
        self.progress = value.min(self.max);
        self.redraw_requested = true;
    }

    /// Get the current progress.
    #[must_use]
    pub const fn get_progress(&self) -> i32 {
        self.progress
    }

    /// Set the upper bound and request a redraw.
    ///
    /// Current progress is left as-is even when it now exceeds `max`.
    pub fn set_max(&mut self, max: i32) {
        self.max = max;
        self.redraw_requested = true;
    }

    /// Get the upper bound.
    #[must_use]
    pub const fn get_max(&self) -> i32 {
        self.max
    }

    /// Lower bound of the range. Always zero.
    #[must_use]
    pub const fn get_min(&self) -> i32 {
        0
    }

    /// Get the style.
    #[must_use]
    pub const fn get_style(&self) -> &ArcStyle {
        &self.style
    }

    /// Get the animation duration.
    #[must_use]
    pub const fn get_animation_duration(&self) -> u32 {
        self.animation_duration_ms
    }

    /// Start animating from the current progress toward `target`.
    ///
    /// An in-flight transition is dropped and the new one starts from
    /// wherever the previous one had got to.
    pub fn set_progress_with_animation(&mut self, target: i32) {
        let transition = Transition::new(self.progress, target, self.animation_duration_ms)
            .with_easing(self.easing);

        match self.transition.replace(transition) {
            Some(previous) => debug!(
                from = self.progress,
                to = target,
                replaced_target = previous.target(),
                "replacing in-flight progress transition"
            ),
            None => debug!(
                from = self.progress,
                to = target,
                duration_ms = self.animation_duration_ms,
                "starting progress transition"
            ),
        }

        if self.animation_duration_ms == 0 {
            self.advance(0);
        }
    }

    /// Advance the active transition by `delta_ms` and write its value
    /// through [`Self::set_progress`].
    ///
    /// Returns `true` while a transition is still running afterwards.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.advance(delta_ms);
        let value = transition.value();
        let done = transition.is_complete();

        self.set_progress(value);
        if done {
            debug!(progress = self.progress, "progress transition finished");
            self.transition = None;
        }
        !done
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub const fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Whether a redraw has been requested since the last
    /// [`Self::take_redraw_request`].
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Foreground sweep in degrees. Not finite when `max == 0`.
    #[must_use]
    pub fn sweep_angle(&self) -> f32 {
        crate::arc_geometry::sweep_angle(self.progress, self.max)
    }

    /// Pointer direction in degrees, `135 + sweep`.
    #[must_use]
    pub fn pointer_angle(&self) -> f32 {
        START_ANGLE + self.sweep_angle()
    }

    /// Geometry of the current frame within the current bounds.
    #[must_use]
    pub fn geometry(&self) -> ArcGeometry {
        ArcGeometry::compute(self.bounds, self.style.stroke_width, self.progress, self.max)
    }

    /// Value announced to assistive technology.
    #[must_use]
    pub fn accessible_value(&self) -> String {
        format!("{} of {}", self.progress, self.max)
    }

    fn gradient(&self, geometry: &ArcGeometry) -> SweepGradient {
        SweepGradient::new(
            geometry.center,
            self.style.gradient_colors().to_vec(),
            COLOR_STOPS.to_vec(),
        )
        .rotated(START_ANGLE)
    }
}

impl Brick for ArcProgressBar {
    fn brick_name(&self) -> &'static str {
        "arc_progress_bar"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        static ASSERTIONS: &[BrickAssertion] = &[
            BrickAssertion::PositiveRange,
            BrickAssertion::MaxLatencyMs(16),
        ];
        ASSERTIONS
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::default();
        for assertion in self.assertions() {
            match assertion {
                BrickAssertion::PositiveRange => verification.check(
                    assertion.clone(),
                    self.max > 0,
                    format!("max is {}", self.max),
                ),
                _ => verification.check(assertion.clone(), true, ""),
            }
        }
        verification
    }
}

impl Widget for ArcProgressBar {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::square(PREFERRED_SIZE))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        if self.bounds != bounds {
            self.redraw_requested = true;
        }
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Err(err) = self.verify().into_result() {
            warn!(%err, "skipping arc gauge paint");
            return;
        }

        let geometry = self.geometry();
        let stroke = self.style.stroke_width;
        trace!(
            progress = self.progress,
            max = self.max,
            sweep = geometry.sweep_angle,
            "painting arc gauge"
        );

        canvas.stroke_arc(
            geometry.oval,
            START_ANGLE,
            SWEEP_RANGE,
            &StrokeStyle::solid(self.style.background_color, stroke),
        );

        canvas.stroke_gradient_arc(
            geometry.oval,
            START_ANGLE,
            geometry.sweep_angle,
            stroke,
            &self.gradient(&geometry),
        );

        let tick_style = StrokeStyle::solid(Color::BLACK, TICK_STROKE_WIDTH);
        for tick in &geometry.ticks {
            canvas.draw_line(tick.outer, tick.inner, &tick_style);
        }

        canvas.fill_polygon(&geometry.pointer.polygon(), self.style.pointer_color);
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressBar
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcgauge_core::{DrawCommand, Point, RecordingCanvas};
    use proptest::prelude::*;

    fn laid_out(progress: i32) -> ArcProgressBar {
        let mut gauge = ArcProgressBar::new().progress(progress);
        gauge.layout(Rect::new(0.0, 0.0, 300.0, 300.0));
        gauge
    }

    fn painted(gauge: &ArcProgressBar) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        gauge.paint(&mut canvas);
        canvas.take_commands()
    }

    // ===== Construction Tests =====

    #[test]
    fn test_arc_progress_defaults() {
        let gauge = ArcProgressBar::new();
        assert_eq!(gauge.get_progress(), 0);
        assert_eq!(gauge.get_max(), 100);
        assert_eq!(gauge.get_min(), 0);
        assert_eq!(gauge.get_style(), &ArcStyle::default());
        assert_eq!(gauge.get_animation_duration(), 1000);
        assert!(!gauge.is_animating());
        assert!(!gauge.needs_redraw());
    }

    #[test]
    fn test_arc_progress_builder() {
        let gauge = ArcProgressBar::with_style(ArcStyle::default().stroke_width(8.0))
            .max(50)
            .progress(70)
            .animation_duration(250)
            .easing(Easing::Linear)
            .accessible_name("Speed")
            .test_id("speed-gauge");

        assert_eq!(gauge.get_max(), 50);
        assert_eq!(gauge.get_progress(), 50);
        assert_eq!(gauge.get_style().stroke_width, 8.0);
        assert_eq!(gauge.get_animation_duration(), 250);
        assert_eq!(Widget::accessible_name(&gauge), Some("Speed"));
        assert_eq!(Widget::test_id(&gauge), Some("speed-gauge"));
        assert_eq!(gauge.accessible_role(), AccessibleRole::ProgressBar);
    }

    // ===== Progress Tests =====

    #[test]
    fn test_set_progress_clamps_to_max() {
        let mut gauge = ArcProgressBar::new();
        gauge.set_progress(150);
        assert_eq!(gauge.get_progress(), 100);
    }

    #[test]
    fn test_set_progress_keeps_negative() {
        let mut gauge = ArcProgressBar::new();
        gauge.set_progress(-5);
        assert_eq!(gauge.get_progress(), -5);
    }

    #[test]
    fn test_set_max_does_not_reclamp() {
        let mut gauge = ArcProgressBar::new();
        gauge.set_progress(80);
        gauge.set_max(50);
        assert_eq!(gauge.get_progress(), 80);
        assert_eq!(gauge.get_max(), 50);

        gauge.set_progress(80);
        assert_eq!(gauge.get_progress(), 50);
    }

    #[test]
    fn test_sweep_and_pointer_at_75() {
        let mut gauge = ArcProgressBar::new();
        gauge.set_progress(75);
        assert_eq!(gauge.sweep_angle(), 202.5);
        assert_eq!(gauge.pointer_angle(), 337.5);
    }

    #[test]
    fn test_accessible_value() {
        let gauge = ArcProgressBar::new().progress(42);
        assert_eq!(gauge.accessible_value(), "42 of 100");
    }

    // ===== Redraw Tests =====

    #[test]
    fn test_mutations_request_redraw() {
        let mut gauge = ArcProgressBar::new();
        gauge.set_progress(10);
        assert!(gauge.take_redraw_request());
        assert!(!gauge.take_redraw_request());

        gauge.set_max(200);
        assert!(gauge.needs_redraw());
        gauge.take_redraw_request();

        gauge.configure(ArcStyle::default().stroke_width(4.0));
        assert!(gauge.take_redraw_request());
        assert_eq!(gauge.get_style().stroke_width, 4.0);
    }

    #[test]
    fn test_layout_change_requests_redraw() {
        let mut gauge = ArcProgressBar::new();
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        gauge.layout(bounds);
        assert!(gauge.take_redraw_request());
        gauge.layout(bounds);
        assert!(!gauge.take_redraw_request());
        assert_eq!(gauge.bounds(), bounds);
    }

    // ===== Animation Tests =====

    #[test]
    fn test_animation_reaches_target() {
        let mut gauge = ArcProgressBar::new();
        gauge.set_progress_with_animation(100);
        assert!(gauge.is_animating());
        assert_eq!(gauge.get_progress(), 0);

        let mut last = 0;
        for _ in 0..10 {
            gauge.advance(100);
            assert!(gauge.get_progress() >= last);
            last = gauge.get_progress();
        }
        assert_eq!(gauge.get_progress(), 100);
        assert!(!gauge.is_animating());
        assert!(!gauge.advance(16));
    }

    #[test]
    fn test_animation_zero_elapsed_keeps_start() {
        let mut gauge = ArcProgressBar::new().progress(30);
        gauge.set_progress_with_animation(90);
        assert!(gauge.advance(0));
        assert_eq!(gauge.get_progress(), 30);
    }

    #[test]
    fn test_animation_replaces_in_flight() {
        let mut gauge = ArcProgressBar::new().easing(Easing::Linear);
        gauge.set_progress_with_animation(100);
        gauge.advance(500);
        assert_eq!(gauge.get_progress(), 50);

        gauge.set_progress_with_animation(0);
        let transition = gauge.transition().unwrap();
        assert_eq!(transition.start(), 50);
        assert_eq!(transition.target(), 0);
        assert_eq!(transition.elapsed_ms(), 0);

        gauge.advance(1000);
        assert_eq!(gauge.get_progress(), 0);
        assert!(!gauge.is_animating());
    }

    #[test]
    fn test_animation_target_clamped_by_set_progress() {
        let mut gauge = ArcProgressBar::new();
        gauge.set_progress_with_animation(500);
        gauge.advance(1000);
        assert_eq!(gauge.get_progress(), 100);
    }

    #[test]
    fn test_zero_duration_applies_immediately() {
        let mut gauge = ArcProgressBar::new().animation_duration(0);
        gauge.set_progress_with_animation(64);
        assert_eq!(gauge.get_progress(), 64);
        assert!(!gauge.is_animating());
    }

    #[test]
    fn test_advance_without_transition() {
        let mut gauge = ArcProgressBar::new();
        assert!(!gauge.advance(16));
        assert!(!gauge.needs_redraw());
    }

    // ===== Brick Tests =====

    #[test]
    fn test_verify_positive_range() {
        let gauge = ArcProgressBar::new();
        assert!(gauge.can_render());
        assert_eq!(gauge.verify().passed.len(), 2);
    }

    #[test]
    fn test_verify_zero_max_fails() {
        let gauge = ArcProgressBar::new().max(0);
        let verification = gauge.verify();
        assert!(!verification.is_valid());
        assert_eq!(verification.failed[0].0, BrickAssertion::PositiveRange);
        assert_eq!(verification.failed[0].1, "max is 0");
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_order() {
        let commands = painted(&laid_out(75));
        let kinds: Vec<_> = commands.iter().map(DrawCommand::kind).collect();
        assert_eq!(kinds.len(), 14);
        assert_eq!(kinds[0], "arc");
        assert_eq!(kinds[1], "gradient_arc");
        assert!(kinds[2..13].iter().all(|k| *k == "line"));
        assert_eq!(kinds[13], "polygon");
    }

    #[test]
    fn test_paint_background_arc() {
        let commands = painted(&laid_out(0));
        match &commands[0] {
            DrawCommand::Arc {
                oval,
                start_angle,
                sweep_angle,
                style,
            } => {
                assert_eq!(*oval, Rect::new(10.0, 10.0, 280.0, 280.0));
                assert_eq!(*start_angle, 135.0);
                assert_eq!(*sweep_angle, 270.0);
                assert_eq!(style.color, Color::LIGHT_GRAY);
                assert_eq!(style.width, 20.0);
            }
            other => panic!("expected background arc, got {other:?}"),
        }
    }

    #[test]
    fn test_paint_gradient_arc() {
        let commands = painted(&laid_out(75));
        match &commands[1] {
            DrawCommand::GradientArc {
                start_angle,
                sweep_angle,
                width,
                gradient,
                ..
            } => {
                assert_eq!(*start_angle, 135.0);
                assert_eq!(*sweep_angle, 202.5);
                assert_eq!(*width, 20.0);
                assert_eq!(gradient.center, Point::new(150.0, 150.0));
                assert_eq!(gradient.colors, vec![Color::RED, Color::GREEN, Color::BLUE]);
                assert_eq!(gradient.stops, vec![0.0, 0.3, 0.5]);
                assert_eq!(gradient.rotation, 135.0);
                assert_eq!(gradient.color_at(135.0), Color::RED);
            }
            other => panic!("expected gradient arc, got {other:?}"),
        }
    }

    #[test]
    fn test_paint_ticks_style() {
        let commands = painted(&laid_out(0));
        for command in &commands[2..13] {
            match command {
                DrawCommand::Line { style, .. } => {
                    assert_eq!(style.width, 4.0);
                    assert_eq!(style.color, Color::BLACK);
                }
                other => panic!("expected tick line, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_paint_pointer() {
        let mut gauge =
            ArcProgressBar::with_style(ArcStyle::default().pointer_color(Color::RED)).progress(50);
        gauge.layout(Rect::new(0.0, 0.0, 300.0, 300.0));
        let commands = painted(&gauge);
        match commands.last() {
            Some(DrawCommand::Polygon { points, fill }) => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[0], Point::new(150.0, 150.0));
                assert_eq!(*fill, Color::RED);
            }
            other => panic!("expected pointer polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_paint_skipped_for_zero_max() {
        let mut gauge = ArcProgressBar::new().max(0);
        gauge.layout(Rect::new(0.0, 0.0, 300.0, 300.0));
        assert!(painted(&gauge).is_empty());
    }

    #[test]
    fn test_measure_prefers_square() {
        let gauge = ArcProgressBar::new();
        let size = gauge.measure(Constraints::loose(Size::new(1000.0, 1000.0)));
        assert_eq!(size, Size::square(300.0));

        let tight = gauge.measure(Constraints::loose(Size::new(120.0, 400.0)));
        assert_eq!(tight.width, 120.0);
    }

    #[test]
    fn test_event_ignored() {
        let mut gauge = ArcProgressBar::new();
        assert!(gauge.event(&Event::press(Point::new(1.0, 1.0))).is_none());
        assert!(!gauge.is_interactive());
    }

    #[test]
    fn test_serde_skips_runtime_state() {
        let mut gauge = ArcProgressBar::new().progress(20);
        gauge.set_progress_with_animation(80);
        let json = serde_json::to_string(&gauge).unwrap();
        let restored: ArcProgressBar = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.get_progress(), 20);
        assert!(!restored.is_animating());
        assert!(!restored.needs_redraw());
    }

    proptest! {
        #[test]
        fn prop_set_progress_is_min_with_max(value in any::<i32>(), max in 1i32..10_000) {
            let mut gauge = ArcProgressBar::new().max(max);
            gauge.set_progress(value);
            prop_assert_eq!(gauge.get_progress(), value.min(max));
        }

        #[test]
        fn prop_animation_monotonic(start in 0i32..=100, target in 0i32..=100, step in 1u32..200) {
            let mut gauge = ArcProgressBar::new().progress(start);
            gauge.set_progress_with_animation(target);
            let mut last = gauge.get_progress();
            while gauge.advance(step) {
                let v = gauge.get_progress();
                if target >= start {
                    prop_assert!(v >= last);
                } else {
                    prop_assert!(v <= last);
                }
                last = v;
            }
            prop_assert_eq!(gauge.get_progress(), target);
        }

        #[test]
        fn prop_paint_always_fourteen_commands(progress in 0i32..=100, side in 50.0f32..1000.0) {
            let mut gauge = ArcProgressBar::new().progress(progress);
            gauge.layout(Rect::new(0.0, 0.0, side, side));
            prop_assert_eq!(painted(&gauge).len(), 14);
        }
    }
}
