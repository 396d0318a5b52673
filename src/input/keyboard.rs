use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keyboard pan directions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// up = "KeyW"
/// left = "KeyA"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanAction {
    /// Move the view up the screen.
    Up,
    /// Move the view down the screen.
    Down,
    /// Move the view left.
    Left,
    /// Move the view right.
    Right,
}

impl PanAction {
    /// Screen-space drag equivalent of one key press, in pixels.
    ///
    /// Pressing a key behaves like dragging the map by `speed` pixels in the
    /// opposite direction.
    #[must_use]
    pub fn screen_delta(self, speed: f32) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, speed),
            Self::Down => Vec2::new(0.0, -speed),
            Self::Left => Vec2::new(speed, 0.0),
            Self::Right => Vec2::new(-speed, 0.0),
        }
    }
}
