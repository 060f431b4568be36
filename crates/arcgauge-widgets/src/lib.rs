//! Widgets for the arcgauge toolkit: the arc progress gauge plus the button
//! and text label a host screen needs around it.

pub mod arc_geometry;
pub mod arc_progress;
pub mod button;
pub mod style;
pub mod text;

pub use arc_geometry::{ArcGeometry, Pointer, Tick};
pub use arc_progress::ArcProgressBar;
pub use button::{Button, ButtonClicked};
pub use style::{ArcStyle, COLOR_STOPS, DEFAULT_STROKE_WIDTH};
pub use text::Text;
