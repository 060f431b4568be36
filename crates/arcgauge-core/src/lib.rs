//! Core types and traits for the arcgauge widget toolkit.
//!
//! This crate provides the foundational types used by the widgets:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Rendering: the [`Canvas`] trait, [`draw::DrawCommand`] and [`RecordingCanvas`]
//! - Contracts: the [`Widget`] and [`Brick`] traits
//! - Animation: [`Easing`], [`Transition`], [`FrameTimer`]

pub mod animation;
pub mod brick;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{Easing, FrameTimer, Transition, DEFAULT_TRANSITION_MS};
pub use brick::{Brick, BrickAssertion, BrickError, BrickVerification};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, StrokeStyle, SweepGradient, Transform2D};
pub use event::{Event, Key};
pub use geometry::{normalize_degrees, CornerRadius, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};
