use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into [`MapControls::handle_input`](crate::MapControls::handle_input),
/// which arbitrates them into pan and zoom gestures. Screen coordinates are
/// in physical pixels with the origin at the top-left of the viewport.
///
/// Serde uses an internally tagged `snake_case` form so gesture scripts stay
/// readable:
///
/// ```toml
/// [[steps]]
/// event = { type = "wheel", delta = 1.0, x = 400.0, y = 300.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Mouse button pressed.
    PointerDown {
        /// Which button went down.
        button: MouseButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Cursor moved to absolute screen position.
    PointerMove {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button released.
    PointerUp {
        /// Which button was released.
        button: MouseButton,
    },
    /// Scroll wheel at a screen position (positive = zoom in).
    Wheel {
        /// Signed scroll amount.
        delta: f32,
        /// Horizontal cursor position in physical pixels.
        x: f32,
        /// Vertical cursor position in physical pixels.
        y: f32,
    },
    /// Key pressed.
    KeyDown {
        /// Physical key name in `winit::keyboard::KeyCode` debug format
        /// (`"ArrowUp"`, `"KeyW"`, ...).
        key: String,
    },
    /// One or more fingers touched down; `touches` lists every active touch.
    TouchStart {
        /// All touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// Active touches moved.
    TouchMove {
        /// All touches currently on the surface.
        touches: Vec<TouchPoint>,
    },
    /// A touch lifted or was cancelled; `touches` lists those remaining.
    TouchEnd {
        /// Touches still on the surface.
        touches: Vec<TouchPoint>,
    },
    /// Context menu requested (usually a right click).
    ContextMenu,
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, extra).
    Other,
}

/// A single finger on a touch surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Platform touch identifier, stable for the lifetime of the touch.
    #[serde(default)]
    pub id: u64,
    /// Horizontal position in physical pixels.
    pub x: f32,
    /// Vertical position in physical pixels.
    pub y: f32,
}

impl TouchPoint {
    /// Touch at a position with id 0.
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self { id: 0, x, y }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}
