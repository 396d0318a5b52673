//! Input dispatch for [`MapControls`]: turns raw events into gesture state
//! transitions and motion-model targets.

use glam::{Vec2, Vec3};

use super::gesture::{finger_distance, InteractionState};
use super::{ControlEvent, MapControls};
use crate::camera::{ControlledCamera, ProjectionKind};
use crate::geometry::Ray;
use crate::input::{InputEvent, MouseButton, TouchPoint};

/// Which way a zoom gesture moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoomDirection {
    Closer,
    Farther,
}

impl<C: ControlledCamera> MapControls<C> {
    /// Process a platform-agnostic input event.
    ///
    /// Returns `true` if the event was consumed by the controls and the host
    /// should suppress its default handling.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let _ = controls.handle_input(&InputEvent::Wheel { delta: 1.0, x, y });
    /// ```
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.attached {
            return false;
        }
        match event {
            InputEvent::PointerDown { button, x, y } => {
                self.on_pointer_down(*button, Vec2::new(*x, *y))
            }
            InputEvent::PointerMove { x, y } => {
                self.on_pointer_move(Vec2::new(*x, *y))
            }
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::Wheel { delta, x, y } => {
                self.on_wheel(*delta, Vec2::new(*x, *y))
            }
            InputEvent::KeyDown { key } => self.on_key_down(key),
            InputEvent::TouchStart { touches } => self.on_touch_start(touches),
            InputEvent::TouchMove { touches } => self.on_touch_move(touches),
            InputEvent::TouchEnd { .. } => self.on_touch_end(),
            InputEvent::ContextMenu => true,
        }
    }

    // ── Pointer ──

    fn on_pointer_down(&mut self, button: MouseButton, at: Vec2) -> bool {
        let controls = &self.options.controls;
        if !controls.enabled || self.gesture.state() != InteractionState::None
        {
            return false;
        }

        let buttons = self.options.buttons;
        let state = if button == buttons.zoom {
            if !controls.enable_zoom {
                return false;
            }
            InteractionState::Dolly
        } else if button == buttons.pan {
            if !controls.enable_pan {
                return false;
            }
            InteractionState::Pan
        } else {
            return false;
        };

        self.gesture.begin_pointer(state, at);
        log::trace!("{state:?} started at {at}");
        self.dispatcher.dispatch(ControlEvent::Start);
        true
    }

    fn on_pointer_move(&mut self, at: Vec2) -> bool {
        if !self.gesture.pointer_captured() || !self.options.controls.enabled {
            return false;
        }

        match self.gesture.state() {
            InteractionState::Dolly => {
                if !self.options.controls.enable_zoom {
                    return false;
                }
                let delta = self.gesture.dolly_delta(at.y);
                if delta > 0.0 {
                    self.zoom(ZoomDirection::Farther);
                } else if delta < 0.0 {
                    self.zoom(ZoomDirection::Closer);
                }
                self.update();
                true
            }
            InteractionState::Pan => {
                if !self.options.controls.enable_pan {
                    return false;
                }
                let delta = self.gesture.pan_delta(at);
                self.pan_by_pixels(delta);
                self.update();
                true
            }
            _ => false,
        }
    }

    fn on_pointer_up(&mut self) -> bool {
        if !self.gesture.pointer_captured() || !self.options.controls.enabled {
            return false;
        }
        let ended = self.gesture.end();
        log::trace!("{ended:?} ended");
        self.dispatcher.dispatch(ControlEvent::End);
        true
    }

    // ── Wheel ──

    fn on_wheel(&mut self, delta: f32, at: Vec2) -> bool {
        let controls = &self.options.controls;
        if !controls.enabled
            || !controls.enable_zoom
            || self.gesture.state() != InteractionState::None
        {
            return false;
        }

        let ndc = self.viewport.to_ndc(at.x, at.y);
        if self.last_wheel_ndc != Some(ndc) {
            self.last_wheel_ndc = Some(ndc);
            self.recenter_zoom(ndc);
        }

        if delta > 0.0 {
            self.zoom(ZoomDirection::Closer);
        } else if delta < 0.0 {
            self.zoom(ZoomDirection::Farther);
        }
        self.update();

        self.dispatcher.dispatch(ControlEvent::Start);
        self.dispatcher.dispatch(ControlEvent::End);
        true
    }

    /// Zoom toward whatever plane point lies under the cursor.
    fn recenter_zoom(&mut self, ndc: Vec2) {
        if !ndc.is_finite() {
            return;
        }
        let ray = self.camera.ray_from_ndc(ndc);
        match ray.intersect_plane(&self.target) {
            Some(anchor) => {
                self.motion.recenter(
                    self.camera.position(),
                    anchor,
                    self.options.controls.max_distance,
                );
                log::trace!("zoom re-centered on {anchor}");
            }
            None => log::trace!("cursor ray misses target plane; keeping anchor"),
        }
    }

    // ── Keyboard ──

    fn on_key_down(&mut self, key: &str) -> bool {
        let controls = &self.options.controls;
        if !controls.enabled || !controls.enable_keys || !controls.enable_pan {
            return false;
        }
        let Some(action) = self.options.keybindings.lookup(key) else {
            return false;
        };
        let delta = action.screen_delta(controls.key_pan_speed);
        self.pan_by_pixels(delta);
        self.update();
        true
    }

    // ── Touch ──

    fn on_touch_start(&mut self, touches: &[TouchPoint]) -> bool {
        let controls = &self.options.controls;
        let previous = self.gesture.state();
        if !controls.enabled || previous.is_pointer() {
            return false;
        }

        match touches {
            [one] => {
                if !controls.enable_pan {
                    return false;
                }
                self.gesture.begin_touch_pan(Vec2::new(one.x, one.y));
            }
            [_, _] => {
                if !controls.enable_zoom {
                    return false;
                }
                let spread = finger_distance(touches).unwrap_or_default();
                self.gesture.begin_pinch(spread);
            }
            _ => {
                let _ = self.end_touch_gesture();
                return false;
            }
        }

        if previous == InteractionState::None {
            log::trace!("{:?} started", self.gesture.state());
            self.dispatcher.dispatch(ControlEvent::Start);
        }
        true
    }

    fn on_touch_move(&mut self, touches: &[TouchPoint]) -> bool {
        let controls = &self.options.controls;
        if !controls.enabled {
            return false;
        }

        match touches {
            [one] => {
                if !controls.enable_pan
                    || self.gesture.state() != InteractionState::TouchPan
                {
                    return false;
                }
                let delta = self.gesture.pan_delta(Vec2::new(one.x, one.y));
                self.pan_by_pixels(delta);
                self.update();
                true
            }
            [_, _] => {
                if !controls.enable_zoom
                    || self.gesture.state() != InteractionState::TouchDolly
                {
                    return false;
                }
                let spread = finger_distance(touches).unwrap_or_default();
                let delta = self.gesture.dolly_delta(spread);
                if delta > 0.0 {
                    self.zoom(ZoomDirection::Closer);
                } else if delta < 0.0 {
                    self.zoom(ZoomDirection::Farther);
                }
                self.update();
                true
            }
            _ => {
                let _ = self.end_touch_gesture();
                false
            }
        }
    }

    fn on_touch_end(&mut self) -> bool {
        if !self.options.controls.enabled {
            return false;
        }
        self.end_touch_gesture()
    }

    /// Drop any running touch gesture, notifying listeners if one was active.
    fn end_touch_gesture(&mut self) -> bool {
        if !self.gesture.state().is_touch() {
            return false;
        }
        let ended = self.gesture.end();
        log::trace!("{ended:?} ended");
        self.dispatcher.dispatch(ControlEvent::End);
        true
    }

    // ── Motion ──

    /// Move the zoom target one step. Only perspective cameras can dolly;
    /// anything else switches zoom off for good.
    fn zoom(&mut self, direction: ZoomDirection) {
        if self.camera.projection() != ProjectionKind::Perspective {
            log::warn!(
                "map controls encountered an unsupported camera type - dolly/zoom disabled"
            );
            self.options.controls.enable_zoom = false;
            return;
        }

        let scale = self.options.controls.zoom_scale();
        match direction {
            ZoomDirection::Closer => self.motion.zoom_in(scale),
            ZoomDirection::Farther => self.motion.zoom_out(scale),
        }
    }

    /// Pan by a screen-space drag of `delta` pixels (right and down
    /// positive).
    ///
    /// One pixel maps to a world distance proportional to the camera's
    /// distance from the plane, so dragging feels the same at every zoom
    /// level. Movement follows the camera's local axes, not world axes.
    fn pan_by_pixels(&mut self, delta: Vec2) {
        let height = self.viewport.height;
        if height <= 0.0 {
            return;
        }
        let position = self.camera.position();
        let ray = Ray::new(position, self.motion.orientation());
        let Some(distance) = ray.distance_to_plane(&self.target) else {
            log::trace!("camera no longer faces target plane; pan skipped");
            return;
        };

        // we don't use the width, since the vertical fov is fixed to the
        // viewport height
        let half_height = self.camera.view_half_height(distance);
        let (right, up) = self.camera.local_axes();
        let pan: Vec3 = right * (-2.0 * delta.x * half_height / height)
            + up * (2.0 * delta.y * half_height / height);
        self.motion.add_pan(pan);
    }
}
