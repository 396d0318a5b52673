use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Which mouse button starts which drag gesture.
pub struct MouseButtonOptions {
    /// Button that starts a dolly drag.
    pub zoom: MouseButton,
    /// Button that starts a pan drag.
    pub pan: MouseButton,
}

impl Default for MouseButtonOptions {
    fn default() -> Self {
        Self {
            zoom: MouseButton::Middle,
            pan: MouseButton::Left,
        }
    }
}
