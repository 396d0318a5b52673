use glam::Vec2;

use crate::input::TouchPoint;

/// The single interaction the controls are currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Idle; any gesture may start.
    #[default]
    None,
    /// Zoom by dragging with the zoom button.
    Dolly,
    /// Pan by dragging with the pan button.
    Pan,
    /// Two-finger pinch zoom.
    TouchDolly,
    /// One-finger drag pan.
    TouchPan,
}

impl InteractionState {
    /// Whether a touch gesture is running.
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::TouchDolly | Self::TouchPan)
    }

    /// Whether a mouse-driven gesture is running.
    #[must_use]
    pub fn is_pointer(self) -> bool {
        matches!(self, Self::Dolly | Self::Pan)
    }
}

/// Tracks the active interaction and the last sample of the gesture driving
/// it, so each move event turns into a delta since the previous one.
#[derive(Debug, Clone, Default)]
pub(crate) struct GestureTracker {
    state: InteractionState,
    pan_start: Vec2,
    dolly_start: f32,
    pointer_captured: bool,
}

impl GestureTracker {
    pub(crate) fn state(&self) -> InteractionState {
        self.state
    }

    pub(crate) fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Start a mouse drag and capture the pointer until release.
    pub(crate) fn begin_pointer(&mut self, state: InteractionState, at: Vec2) {
        self.state = state;
        self.pan_start = at;
        self.dolly_start = at.y;
        self.pointer_captured = true;
    }

    pub(crate) fn begin_touch_pan(&mut self, at: Vec2) {
        self.state = InteractionState::TouchPan;
        self.pan_start = at;
    }

    pub(crate) fn begin_pinch(&mut self, finger_distance: f32) {
        self.state = InteractionState::TouchDolly;
        self.dolly_start = finger_distance;
    }

    /// Screen-space movement since the last pan sample.
    pub(crate) fn pan_delta(&mut self, to: Vec2) -> Vec2 {
        let delta = to - self.pan_start;
        self.pan_start = to;
        delta
    }

    /// Vertical pointer movement (or finger spread change) since the last
    /// dolly sample.
    pub(crate) fn dolly_delta(&mut self, to: f32) -> f32 {
        let delta = to - self.dolly_start;
        self.dolly_start = to;
        delta
    }

    /// Back to idle; returns the state that was running.
    pub(crate) fn end(&mut self) -> InteractionState {
        self.pointer_captured = false;
        std::mem::take(&mut self.state)
    }

    pub(crate) fn release_pointer(&mut self) {
        self.pointer_captured = false;
    }
}

/// Distance between the first two touches, if there are two.
pub(crate) fn finger_distance(touches: &[TouchPoint]) -> Option<f32> {
    match touches {
        [a, b, ..] => Some(Vec2::new(a.x - b.x, a.y - b.y).length()),
        _ => None,
    }
}
