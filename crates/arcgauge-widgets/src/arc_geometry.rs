//! Geometry of the arc gauge, derived fresh for every paint.
//!
//! The gauge is a 270° arc opening at the bottom: it starts at 135° (lower
//! left) and ends at 405° (45°, lower right). Angles are clockwise in screen
//! coordinates.

use arcgauge_core::{Point, Rect};

/// Angle where the arc starts.
pub const START_ANGLE: f32 = 135.0;
/// Total angular span of the arc.
pub const SWEEP_RANGE: f32 = 270.0;
/// Number of intervals between ticks (ticks = intervals + 1).
pub const TICK_INTERVALS: usize = 10;
/// Radial length of a tick.
pub const TICK_LENGTH: f32 = 20.0;
/// Stroke width of a tick.
pub const TICK_STROKE_WIDTH: f32 = 4.0;
/// Distance from the arc radius to the pointer base.
pub const POINTER_INSET: f32 = 40.0;
/// Half width of the pointer base, applied on both axes.
pub const POINTER_HALF_WIDTH: f32 = 20.0;

/// Foreground sweep for `progress` out of `max`, in degrees.
///
/// `max` must be positive; zero yields a non-finite angle.
#[must_use]
pub fn sweep_angle(progress: i32, max: i32) -> f32 {
    (i64::from(progress) * 270) as f32 / max as f32
}

/// One graduation line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Angle of the tick in degrees
    pub angle: f32,
    /// Point on the arc radius
    pub outer: Point,
    /// Point `TICK_LENGTH` closer to the center
    pub inner: Point,
}

/// The pointer triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Direction of the pointer, `START_ANGLE + sweep`, not wrapped
    pub angle: f32,
    /// Triangle apex at the widget center
    pub apex: Point,
    /// Base center on the pointer radius
    pub tip: Point,
    /// Base corners, offset `(-w, -w)` and `(+w, -w)` from `tip`
    pub corners: [Point; 2],
}

impl Pointer {
    /// Vertices in paint order.
    #[must_use]
    pub const fn polygon(&self) -> [Point; 3] {
        [self.apex, self.corners[0], self.corners[1]]
    }
}

/// Everything needed to paint one frame of the gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGeometry {
    /// Widget bounds
    pub bounds: Rect,
    /// Oval the arcs are inscribed in (bounds inset by half the stroke)
    pub oval: Rect,
    /// Widget center
    pub center: Point,
    /// Arc radius, derived from the widget width only
    pub radius: f32,
    /// Foreground sweep in degrees
    pub sweep_angle: f32,
    /// Graduation lines, `TICK_INTERVALS + 1` of them
    pub ticks: Vec<Tick>,
    /// Pointer triangle
    pub pointer: Pointer,
}

impl ArcGeometry {
    /// Compute the frame for a widget occupying `bounds`.
    #[must_use]
    pub fn compute(bounds: Rect, stroke_width: f32, progress: i32, max: i32) -> Self {
        let oval = bounds.inset(stroke_width / 2.0);
        let center = bounds.center();
        let radius = (bounds.width - stroke_width) / 2.0;
        let sweep = sweep_angle(progress, max);

        let step = SWEEP_RANGE / TICK_INTERVALS as f32;
        let ticks = (0..=TICK_INTERVALS)
            .map(|i| {
                let angle = (i as f32).mul_add(step, START_ANGLE);
                Tick {
                    angle,
                    outer: Point::on_circle(center, radius, angle),
                    inner: Point::on_circle(center, radius - TICK_LENGTH, angle),
                }
            })
            .collect();

        let angle = START_ANGLE + sweep;
        let tip = Point::on_circle(center, radius - POINTER_INSET, angle);
        let pointer = Pointer {
            angle,
            apex: center,
            tip,
            corners: [
                tip.offset(-POINTER_HALF_WIDTH, -POINTER_HALF_WIDTH),
                tip.offset(POINTER_HALF_WIDTH, -POINTER_HALF_WIDTH),
            ],
        };

        Self {
            bounds,
            oval,
            center,
            radius,
            sweep_angle: sweep,
            ticks,
            pointer,
        }
    }
}
