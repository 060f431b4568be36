//! Input events delivered to widgets by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Primary mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
    },
    /// Primary mouse button released
    MouseUp {
        /// Position of release
        position: Point,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Touch started
    TouchStart {
        /// Touch position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Final position
        position: Point,
    },
}

impl Event {
    /// A press at `position`.
    #[must_use]
    pub const fn press(position: Point) -> Self {
        Self::MouseDown { position }
    }

    /// A release at `position`.
    #[must_use]
    pub const fn release(position: Point) -> Self {
        Self::MouseUp { position }
    }
}

/// Keyboard key (the activation keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Space bar
    Space,
}
