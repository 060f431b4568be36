//! arcgauge: an arc-shaped progress gauge widget.
//!
//! The gauge paints into any [`Canvas`]; animation and redraw are driven by
//! the host through [`widgets::ArcProgressBar::advance`] and
//! [`widgets::ArcProgressBar::take_redraw_request`]. [`HostScreen`] is a
//! headless screen wiring a button to randomized, animated gauge updates.
//!
//! ```
//! use arcgauge::{HostScreen, widgets::ArcProgressBar};
//!
//! let mut screen = HostScreen::with_seed(ArcProgressBar::new(), 7);
//! let target = screen.click();
//! while screen.advance(16) {}
//! assert_eq!(screen.gauge().get_progress(), target);
//! assert_eq!(screen.label().content(), format!("Speed: {target}"));
//! ```

pub use arcgauge_core::*;
pub use arcgauge_widgets as widgets;
pub use arcgauge_yaml as yaml;

pub mod screen;

pub use screen::{HostScreen, SpeedSelected, RANDOM_UPPER_BOUND};
