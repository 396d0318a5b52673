//! Input handling: platform-agnostic event types, keyboard pan actions, and
//! (with the `winit` feature) an adapter from winit window events.

/// Platform-agnostic input events.
pub mod event;
/// Keyboard pan actions.
pub mod keyboard;
/// winit window event adapter.
#[cfg(feature = "winit")]
pub mod winit_adapter;

pub use event::{InputEvent, MouseButton, TouchPoint};
pub use keyboard::PanAction;
#[cfg(feature = "winit")]
pub use winit_adapter::WinitInputAdapter;
