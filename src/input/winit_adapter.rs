//! Converts winit window events into [`InputEvent`]s.

use glam::Vec2;
use winit::{
    event::{ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent},
    keyboard::PhysicalKey,
};

use super::event::{InputEvent, MouseButton, TouchPoint};

/// Scale applied to pixel-precise scroll deltas (trackpads) so they land in
/// the same range as line deltas.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Tracks the cursor and active touches so that winit's stateless events can
/// be turned into self-contained [`InputEvent`]s.
///
/// # Example
///
/// ```ignore
/// fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
///     if let Some(input) = self.adapter.translate(&event) {
///         let _ = self.controls.handle_input(&input);
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct WinitInputAdapter {
    cursor: Vec2,
    touches: Vec<TouchPoint>,
}

impl WinitInputAdapter {
    /// Create an adapter with the cursor at the origin and no touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Translate one window event. Events the controls do not care about
    /// yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let button = MouseButton::from(*button);
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        button,
                        x: self.cursor.x,
                        y: self.cursor.y,
                    },
                    ElementState::Released => InputEvent::PointerUp { button },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
                delta: scroll_amount(delta),
                x: self.cursor.x,
                y: self.cursor.y,
            }),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(InputEvent::KeyDown {
                    key: format!("{code:?}"),
                })
            }
            WindowEvent::Touch(touch) => Some(self.translate_touch(touch)),
            _ => None,
        }
    }

    fn translate_touch(&mut self, touch: &Touch) -> InputEvent {
        self.track_touch(
            TouchPoint {
                id: touch.id,
                x: touch.location.x as f32,
                y: touch.location.y as f32,
            },
            touch.phase,
        )
    }

    /// Update the active touch list and report every touch still down.
    fn track_touch(&mut self, point: TouchPoint, phase: TouchPhase) -> InputEvent {
        match phase {
            TouchPhase::Started => {
                self.touches.retain(|t| t.id != point.id);
                self.touches.push(point);
                InputEvent::TouchStart {
                    touches: self.touches.clone(),
                }
            }
            TouchPhase::Moved => {
                if let Some(existing) =
                    self.touches.iter_mut().find(|t| t.id == point.id)
                {
                    *existing = point;
                }
                InputEvent::TouchMove {
                    touches: self.touches.clone(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|t| t.id != point.id);
                InputEvent::TouchEnd {
                    touches: self.touches.clone(),
                }
            }
        }
    }
}

/// Signed wheel amount in lines.
fn scroll_amount(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
    }
}
