//! Map-style pan and zoom controls for a camera looking at a target plane.
//!
//! [`MapControls`] owns the host camera and target plane, turns
//! [`InputEvent`](crate::InputEvent)s into pan and zoom targets, and moves the
//! camera toward them a little on every [`update`](MapControls::update).
//!
//! ```ignore
//! let camera = PerspectiveCamera::new(Vec3::new(0.0, 500.0, 0.0), 45.0, 16.0 / 9.0);
//! let mut controls =
//!     MapControls::new(camera, Plane::GROUND, Viewport::new(1280.0, 720.0), options)?;
//!
//! // in the event loop
//! let _ = controls.handle_input(&event);
//!
//! // once per rendered frame
//! controls.update();
//! renderer.draw(controls.camera());
//! ```

/// Start/change/end notifications.
pub mod dispatcher;
/// Interaction state and per-gesture sample tracking.
pub mod gesture;
mod handlers;
/// Damped zoom/pan motion model.
pub mod motion;

use glam::{Vec2, Vec3};

pub use dispatcher::{ControlEvent, EventDispatcher, ListenerId};
pub use gesture::InteractionState;
use gesture::GestureTracker;
pub use motion::MotionModel;

use crate::camera::ControlledCamera;
use crate::error::ControlsError;
use crate::geometry::Plane;
use crate::options::Options;

/// Size of the surface receiving input, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height, or 1 for an empty viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Convert a pixel position to normalized device coordinates
    /// (`[-1, 1]`, y up).
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width) * 2.0 - 1.0,
            -(y / self.height) * 2.0 + 1.0,
        )
    }
}

/// Values captured at construction and restored by [`MapControls::reset`].
#[derive(Debug, Clone)]
struct Snapshot {
    target: Plane,
    position: Vec3,
    zoom: f32,
    motion: MotionModel,
}

/// Pan and zoom controls for a camera hovering over a target plane.
///
/// The camera is oriented once, at construction, to look along the plane
/// normal; afterwards only its position changes. Input handlers update the
/// motion model's targets and [`update`](Self::update) eases the camera
/// toward them by a fixed fraction per call, so the host must call it once
/// per rendered frame.
pub struct MapControls<C: ControlledCamera> {
    camera: C,
    target: Plane,
    viewport: Viewport,
    /// Behavior switches, speeds, and bindings. Mutable at any time.
    pub options: Options,
    motion: MotionModel,
    gesture: GestureTracker,
    last_wheel_ndc: Option<Vec2>,
    attached: bool,
    dispatcher: EventDispatcher,
    snapshot: Snapshot,
}

impl<C: ControlledCamera> MapControls<C> {
    /// Take control of `camera`, orient it toward `target`, and place it.
    ///
    /// Fails if the options are invalid or if no point of the plane can be
    /// reached from the camera along the plane normal.
    pub fn new(
        mut camera: C,
        target: Plane,
        viewport: Viewport,
        mut options: Options,
    ) -> Result<Self, ControlsError> {
        options.controls.validate()?;
        options.keybindings.rebuild_reverse_map();

        let position = camera.position();
        let zoom = camera.zoom();

        let anchor = motion::find_plane_anchor(position, &target)?;
        let distance = anchor.distance(position);
        if !options.controls.max_distance.is_finite() {
            log::debug!(
                "unbounded max_distance resolved to starting distance {distance}"
            );
            options.controls.max_distance = distance;
            options.controls.min_distance =
                options.controls.min_distance.min(distance);
        }

        // set the orientation of the camera towards the map
        camera.look_at(anchor);
        camera.set_aspect(viewport.aspect());

        let motion =
            MotionModel::new(position, anchor, options.controls.max_distance);
        log::debug!(
            "map controls anchored at {anchor} from {position} (distance {distance})"
        );

        let mut controls = Self {
            camera,
            target,
            viewport,
            options,
            motion: motion.clone(),
            gesture: GestureTracker::default(),
            last_wheel_ndc: None,
            attached: true,
            dispatcher: EventDispatcher::default(),
            snapshot: Snapshot {
                target,
                position,
                zoom,
                motion,
            },
        };
        controls.update();
        Ok(controls)
    }

    /// Advance the damped motion by one step and move the camera.
    ///
    /// Call exactly once per rendered frame; the damping rate is per call,
    /// not per unit of time.
    pub fn update(&mut self) {
        let controls = &self.options.controls;
        let position =
            self.motion.step(controls.min_distance, controls.max_distance);
        self.camera.set_position(position);
    }

    /// Restore the target plane, camera position, camera zoom, and motion
    /// state captured at construction, and cancel any gesture.
    pub fn reset(&mut self) {
        self.target = self.snapshot.target;
        self.camera.set_position(self.snapshot.position);
        self.camera.set_zoom(self.snapshot.zoom);
        self.motion = self.snapshot.motion.clone();
        self.last_wheel_ndc = None;

        self.camera.update_projection();
        self.dispatcher.dispatch(ControlEvent::Change);

        self.update();

        let _ = self.gesture.end();
    }

    /// Stop listening for input. Numeric state is kept as is.
    pub fn dispose(&mut self) {
        self.attached = false;
        self.gesture.release_pointer();
        log::debug!("map controls detached");
    }

    /// Start listening for input again after [`dispose`](Self::dispose).
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Whether input events are being handled.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The viewport size changed.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(self.viewport.aspect());
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Interaction currently running.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.gesture.state()
    }

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable access to the camera for projection tweaks. Position and
    /// orientation are overwritten by the controls.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Give the camera back to the host.
    pub fn into_camera(self) -> C {
        self.camera
    }

    /// The target plane.
    #[must_use]
    pub fn target(&self) -> &Plane {
        &self.target
    }

    /// Replace the target plane. Anchors are not recomputed until the next
    /// wheel re-centering.
    pub fn set_target(&mut self, target: Plane) {
        self.target = target;
    }

    /// Read-only view of the motion model.
    #[must_use]
    pub fn motion(&self) -> &MotionModel {
        &self.motion
    }

    /// Register a start/change/end listener.
    pub fn add_listener<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(ControlEvent) + 'static,
    {
        self.dispatcher.add_listener(callback)
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.dispatcher.remove_listener(id)
    }
}

impl<C: ControlledCamera + std::fmt::Debug> std::fmt::Debug for MapControls<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapControls")
            .field("camera", &self.camera)
            .field("target", &self.target)
            .field("viewport", &self.viewport)
            .field("state", &self.gesture.state())
            .field("motion", &self.motion)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::camera::{OrthographicCamera, PerspectiveCamera};
    use crate::input::{InputEvent, MouseButton, TouchPoint};

    const EPS: f32 = 1e-2;
    const START: Vec3 = Vec3::new(0.0, 100.0, 0.0);

    fn options_with(min: f32, max: f32) -> Options {
        let mut options = Options::default();
        options.controls.min_distance = min;
        options.controls.max_distance = max;
        options
    }

    fn controls(options: Options) -> MapControls<PerspectiveCamera> {
        let camera = PerspectiveCamera::new(START, 45.0, 4.0 / 3.0);
        MapControls::new(
            camera,
            Plane::GROUND,
            Viewport::new(800.0, 600.0),
            options,
        )
        .unwrap()
    }

    fn settle<C: ControlledCamera>(controls: &mut MapControls<C>) {
        for _ in 0..300 {
            controls.update();
        }
    }

    fn record<C: ControlledCamera>(
        controls: &mut MapControls<C>,
    ) -> Rc<RefCell<Vec<ControlEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let _ = controls.add_listener(move |e| sink.borrow_mut().push(e));
        events
    }

    fn wheel(delta: f32) -> InputEvent {
        InputEvent::Wheel {
            delta,
            x: 400.0,
            y: 300.0,
        }
    }

    fn down(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { button, x, y }
    }

    fn up(button: MouseButton) -> InputEvent {
        InputEvent::PointerUp { button }
    }

    fn touches(points: &[(f32, f32)]) -> Vec<TouchPoint> {
        points.iter().map(|&(x, y)| TouchPoint::at(x, y)).collect()
    }

    // ── Construction ──

    #[test]
    fn test_starts_where_camera_was() {
        let controls = controls(options_with(0.0, 150.0));
        assert!((controls.camera().eye - START).length() < EPS);
        assert!((controls.motion().target_zoom() - 100.0).abs() < EPS);
        assert_eq!(controls.state(), InteractionState::None);
        assert!(controls.is_attached());
    }

    #[test]
    fn test_camera_looks_down_at_plane() {
        let controls = controls(options_with(0.0, 150.0));
        assert!((controls.camera().forward() - Vec3::NEG_Y).length() < 1e-4);
        assert!(
            (controls.motion().orientation() - Vec3::NEG_Y).length() < 1e-4
        );
    }

    #[test]
    fn test_unbounded_max_resolves_to_start_distance() {
        let controls = controls(Options::default());
        assert!((controls.options.controls.max_distance - 100.0).abs() < EPS);
        assert!((controls.camera().eye - START).length() < EPS);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let camera = PerspectiveCamera::new(START, 45.0, 1.0);
        let result = MapControls::new(
            camera,
            Plane::GROUND,
            Viewport::new(800.0, 600.0),
            options_with(200.0, 100.0),
        );
        assert!(matches!(result, Err(ControlsError::InvalidOptions(_))));
    }

    #[test]
    fn test_camera_on_plane_rejected() {
        let camera = PerspectiveCamera::new(Vec3::new(5.0, 0.0, 5.0), 45.0, 1.0);
        let result = MapControls::new(
            camera,
            Plane::GROUND,
            Viewport::new(800.0, 600.0),
            Options::default(),
        );
        assert!(matches!(result, Err(ControlsError::CameraOnPlane)));
    }

    #[test]
    fn test_camera_below_plane_still_anchors() {
        let camera =
            PerspectiveCamera::new(Vec3::new(0.0, -40.0, 0.0), 45.0, 1.0);
        let controls = MapControls::new(
            camera,
            Plane::GROUND,
            Viewport::new(800.0, 600.0),
            Options::default(),
        )
        .unwrap();
        assert!((controls.motion().max_zoom_position()).length() < EPS);
        assert!((controls.motion().orientation() - Vec3::Y).length() < 1e-4);
    }

    // ── Wheel ──

    #[test]
    fn test_wheel_forward_moves_closer() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(controls.handle_input(&wheel(1.0)));
        let expected = 100.0 * 0.95_f32.powf(4.0);
        assert!((controls.motion().target_zoom() - expected).abs() < EPS);

        settle(&mut controls);
        let eye = controls.camera().eye;
        assert!((eye.y - expected).abs() < EPS);
        assert!(eye.x.abs() < EPS && eye.z.abs() < EPS);
    }

    #[test]
    fn test_wheel_back_stops_at_max_distance() {
        let mut controls = controls(options_with(0.0, 150.0));
        for _ in 0..10 {
            assert!(controls.handle_input(&wheel(-1.0)));
        }
        settle(&mut controls);
        assert!((controls.camera().eye.y - 150.0).abs() < EPS);
    }

    #[test]
    fn test_wheel_forward_stops_at_min_distance() {
        let mut controls = controls(options_with(50.0, 150.0));
        for _ in 0..20 {
            assert!(controls.handle_input(&wheel(1.0)));
        }
        settle(&mut controls);
        assert!((controls.camera().eye.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_wheel_zooms_toward_cursor() {
        let mut controls = controls(options_with(0.0, 150.0));
        // top-left corner of the viewport
        assert!(controls.handle_input(&InputEvent::Wheel {
            delta: 1.0,
            x: 0.0,
            y: 0.0,
        }));
        let anchor = controls.motion().max_zoom_position();
        assert!(anchor.y.abs() < EPS);
        assert!(anchor.x < 0.0 && anchor.z < 0.0);

        settle(&mut controls);
        let eye = controls.camera().eye;
        assert!(eye.y < 100.0);
        assert!(eye.x < 0.0 && eye.z < 0.0);
        // on the line from the new anchor back to where the camera started
        let back = (eye - anchor).normalize();
        assert!((back - (START - anchor).normalize()).length() < 1e-3);
    }

    #[test]
    fn test_off_center_wheel_eases_instead_of_jumping() {
        // unbounded max resolves to 100, and the corner ray hits the plane
        // farther away than that
        let mut controls = controls(Options::default());
        let before = controls.camera().eye;
        assert!(controls.handle_input(&InputEvent::Wheel {
            delta: 1.0,
            x: 0.0,
            y: 0.0,
        }));
        let anchor = controls.motion().max_zoom_position();
        let distance = anchor.distance(before);
        assert!(distance > 100.0);

        // the handler's own update is the first damped step
        let jump = controls.camera().eye.distance(before);
        assert!(jump < 0.1 * distance + 1e-3, "jumped {jump}");

        let after_one = controls.camera().eye;
        controls.update();
        assert!(controls.camera().eye.distance(after_one) < jump);

        settle(&mut controls);
        let settled = controls.camera().eye.distance(anchor);
        let expected = distance * 0.95_f32.powf(4.0);
        assert!((controls.motion().target_zoom() - expected).abs() < 1e-2);
        assert!((settled - expected).abs() < 1e-2);
    }

    #[test]
    fn test_wheel_emits_start_then_end() {
        let mut controls = controls(options_with(0.0, 150.0));
        let events = record(&mut controls);
        assert!(controls.handle_input(&wheel(1.0)));
        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::End]
        );
        assert_eq!(controls.state(), InteractionState::None);
    }

    // ── Pointer ──

    #[test]
    fn test_dolly_drag_down_moves_farther() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(controls.handle_input(&down(MouseButton::Middle, 400.0, 300.0)));
        assert_eq!(controls.state(), InteractionState::Dolly);
        assert!(controls.handle_input(&InputEvent::PointerMove {
            x: 400.0,
            y: 320.0,
        }));
        assert!(controls.handle_input(&up(MouseButton::Middle)));

        let expected = 100.0 / 0.95_f32.powf(4.0);
        assert!((controls.motion().target_zoom() - expected).abs() < EPS);
        settle(&mut controls);
        assert!((controls.camera().eye.y - expected).abs() < EPS);
    }

    #[test]
    fn test_dolly_drag_up_moves_closer() {
        let mut controls = controls(options_with(0.0, 150.0));
        let _ = controls.handle_input(&down(MouseButton::Middle, 400.0, 300.0));
        let _ = controls.handle_input(&InputEvent::PointerMove {
            x: 400.0,
            y: 280.0,
        });
        let expected = 100.0 * 0.95_f32.powf(4.0);
        assert!((controls.motion().target_zoom() - expected).abs() < EPS);
    }

    #[test]
    fn test_drag_pan_follows_camera_axes() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(controls.handle_input(&down(MouseButton::Left, 400.0, 300.0)));
        assert_eq!(controls.state(), InteractionState::Pan);
        assert!(controls.handle_input(&InputEvent::PointerMove {
            x: 500.0,
            y: 300.0,
        }));
        let _ = controls.handle_input(&up(MouseButton::Left));

        let half_height = 100.0 * (22.5_f32).to_radians().tan();
        let expected = -2.0 * 100.0 * half_height / 600.0;
        let pan = controls.motion().pan_target();
        assert!((pan.x - expected).abs() < EPS);
        assert!(pan.y.abs() < EPS && pan.z.abs() < EPS);

        settle(&mut controls);
        let eye = controls.camera().eye;
        assert!((eye.x - expected).abs() < EPS);
        assert!((eye.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_second_button_ignored_during_drag() {
        let mut controls = controls(options_with(0.0, 150.0));
        let events = record(&mut controls);
        assert!(controls.handle_input(&down(MouseButton::Middle, 400.0, 300.0)));
        assert!(!controls.handle_input(&down(MouseButton::Left, 400.0, 300.0)));
        assert_eq!(controls.state(), InteractionState::Dolly);
        assert!(controls.handle_input(&up(MouseButton::Middle)));
        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::End]
        );
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(!controls.handle_input(&InputEvent::PointerMove {
            x: 10.0,
            y: 10.0,
        }));
        assert!(!controls.handle_input(&up(MouseButton::Left)));
        assert_eq!(controls.motion().pan_target(), Vec3::ZERO);
    }

    #[test]
    fn test_unbound_button_is_ignored() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(!controls.handle_input(&down(MouseButton::Right, 1.0, 1.0)));
        assert_eq!(controls.state(), InteractionState::None);
    }

    #[test]
    fn test_wheel_ignored_during_drag() {
        let mut controls = controls(options_with(0.0, 150.0));
        let _ = controls.handle_input(&down(MouseButton::Left, 400.0, 300.0));
        assert!(!controls.handle_input(&wheel(1.0)));
        assert!((controls.motion().target_zoom() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_disabled_controls_ignore_input() {
        let mut options = options_with(0.0, 150.0);
        options.controls.enabled = false;
        let mut controls = controls(options);
        assert!(!controls.handle_input(&wheel(1.0)));
        assert!(!controls.handle_input(&down(MouseButton::Left, 1.0, 1.0)));
        assert!(controls.handle_input(&InputEvent::ContextMenu));
    }

    // ── Keyboard ──

    #[test]
    fn test_arrow_key_pans() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(controls.handle_input(&InputEvent::KeyDown {
            key: "ArrowUp".into(),
        }));
        let half_height = 100.0 * (22.5_f32).to_radians().tan();
        let expected = 2.0 * 12.0 * half_height / 600.0;
        let pan = controls.motion().pan_target();
        assert!((pan.length() - expected).abs() < EPS);
        assert!(pan.y.abs() < EPS);
    }

    #[test]
    fn test_arrow_keys_follow_camera_axes() {
        let half_height = 100.0 * (22.5_f32).to_radians().tan();
        let step = 2.0 * 12.0 * half_height / 600.0;
        // (key, expected component along local right, along local up)
        let cases = [
            ("ArrowUp", 0.0, step),
            ("ArrowDown", 0.0, -step),
            ("ArrowLeft", -step, 0.0),
            ("ArrowRight", step, 0.0),
        ];

        for (key, along_right, along_up) in cases {
            let mut controls = controls(options_with(0.0, 150.0));
            let (right, up) = controls.camera().local_axes();
            assert!(controls.handle_input(&InputEvent::KeyDown {
                key: key.into(),
            }));
            let pan = controls.motion().pan_target();
            assert!(
                (pan.dot(right) - along_right).abs() < 1e-3,
                "{key}: right component {}",
                pan.dot(right)
            );
            assert!(
                (pan.dot(up) - along_up).abs() < 1e-3,
                "{key}: up component {}",
                pan.dot(up)
            );
        }
    }

    #[test]
    fn test_unbound_key_and_disabled_keys() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(!controls.handle_input(&InputEvent::KeyDown {
            key: "KeyQ".into(),
        }));
        controls.options.controls.enable_keys = false;
        assert!(!controls.handle_input(&InputEvent::KeyDown {
            key: "ArrowUp".into(),
        }));
        assert_eq!(controls.motion().pan_target(), Vec3::ZERO);
    }

    // ── Touch ──

    #[test]
    fn test_pinch_spread_moves_closer() {
        let mut controls = controls(options_with(0.0, 150.0));
        let events = record(&mut controls);
        assert!(controls.handle_input(&InputEvent::TouchStart {
            touches: touches(&[(375.0, 300.0), (425.0, 300.0)]),
        }));
        assert_eq!(controls.state(), InteractionState::TouchDolly);
        assert!(controls.handle_input(&InputEvent::TouchMove {
            touches: touches(&[(350.0, 300.0), (450.0, 300.0)]),
        }));
        let expected = 100.0 * 0.95_f32.powf(4.0);
        assert!((controls.motion().target_zoom() - expected).abs() < EPS);

        assert!(controls.handle_input(&InputEvent::TouchEnd {
            touches: Vec::new(),
        }));
        assert_eq!(controls.state(), InteractionState::None);
        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::End]
        );
    }

    #[test]
    fn test_one_finger_pans() {
        let mut controls = controls(options_with(0.0, 150.0));
        assert!(controls.handle_input(&InputEvent::TouchStart {
            touches: touches(&[(400.0, 300.0)]),
        }));
        assert_eq!(controls.state(), InteractionState::TouchPan);
        assert!(controls.handle_input(&InputEvent::TouchMove {
            touches: touches(&[(450.0, 300.0)]),
        }));
        assert!(controls.motion().pan_target().x < 0.0);
    }

    #[test]
    fn test_second_finger_switches_to_pinch_without_new_start() {
        let mut controls = controls(options_with(0.0, 150.0));
        let events = record(&mut controls);
        let _ = controls.handle_input(&InputEvent::TouchStart {
            touches: touches(&[(400.0, 300.0)]),
        });
        assert!(controls.handle_input(&InputEvent::TouchStart {
            touches: touches(&[(400.0, 300.0), (450.0, 300.0)]),
        }));
        assert_eq!(controls.state(), InteractionState::TouchDolly);
        assert_eq!(*events.borrow(), vec![ControlEvent::Start]);
    }

    #[test]
    fn test_three_fingers_end_touch_gesture() {
        let mut controls = controls(options_with(0.0, 150.0));
        let events = record(&mut controls);
        let _ = controls.handle_input(&InputEvent::TouchStart {
            touches: touches(&[(400.0, 300.0)]),
        });
        assert!(!controls.handle_input(&InputEvent::TouchMove {
            touches: touches(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]),
        }));
        assert_eq!(controls.state(), InteractionState::None);
        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::End]
        );
    }

    #[test]
    fn test_touch_ignored_during_mouse_drag() {
        let mut controls = controls(options_with(0.0, 150.0));
        let _ = controls.handle_input(&down(MouseButton::Left, 400.0, 300.0));
        assert!(!controls.handle_input(&InputEvent::TouchStart {
            touches: touches(&[(400.0, 300.0)]),
        }));
        assert_eq!(controls.state(), InteractionState::Pan);
    }

    // ── Camera support ──

    #[test]
    fn test_orthographic_camera_disables_zoom() {
        let camera = OrthographicCamera::new(START, 50.0, 4.0 / 3.0);
        let mut controls = MapControls::new(
            camera,
            Plane::GROUND,
            Viewport::new(800.0, 600.0),
            Options::default(),
        )
        .unwrap();

        let _ = controls.handle_input(&wheel(1.0));
        assert!(!controls.options.controls.enable_zoom);
        assert!((controls.motion().target_zoom() - 100.0).abs() < EPS);
        assert!(!controls.handle_input(&wheel(1.0)));

        // panning still works
        let _ = controls.handle_input(&down(MouseButton::Left, 400.0, 300.0));
        assert!(controls.handle_input(&InputEvent::PointerMove {
            x: 420.0,
            y: 300.0,
        }));
        assert!(controls.motion().pan_target().length() > 0.0);
    }

    // ── Lifecycle ──

    #[test]
    fn test_reset_restores_start() {
        let mut controls = controls(options_with(0.0, 150.0));
        let events = record(&mut controls);
        let start_motion = controls.motion().clone();

        let _ = controls.handle_input(&InputEvent::Wheel {
            delta: 1.0,
            x: 100.0,
            y: 500.0,
        });
        let _ = controls.handle_input(&down(MouseButton::Left, 400.0, 300.0));
        let _ = controls.handle_input(&InputEvent::PointerMove {
            x: 300.0,
            y: 350.0,
        });
        settle(&mut controls);
        assert!((controls.camera().eye - START).length() > 1.0);

        events.borrow_mut().clear();
        controls.reset();
        assert!((controls.camera().eye - START).length() < 1e-3);
        assert_eq!(controls.state(), InteractionState::None);
        assert_eq!(
            controls.motion().max_zoom_position(),
            start_motion.max_zoom_position()
        );
        assert_eq!(*events.borrow(), vec![ControlEvent::Change]);

        // pointer was released by the reset
        assert!(!controls.handle_input(&InputEvent::PointerMove {
            x: 0.0,
            y: 0.0,
        }));
    }

    #[test]
    fn test_dispose_and_attach() {
        let mut controls = controls(options_with(0.0, 150.0));
        controls.dispose();
        assert!(!controls.is_attached());
        assert!(!controls.handle_input(&wheel(1.0)));
        assert!(!controls.handle_input(&InputEvent::ContextMenu));
        assert!((controls.motion().target_zoom() - 100.0).abs() < EPS);

        controls.attach();
        assert!(controls.handle_input(&wheel(1.0)));
    }

    #[test]
    fn test_removed_listener_is_silent() {
        let mut controls = controls(options_with(0.0, 150.0));
        let events = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&events);
        let id = controls.add_listener(move |_| *sink.borrow_mut() += 1);
        assert!(controls.remove_listener(id));
        assert!(!controls.remove_listener(id));
        let _ = controls.handle_input(&wheel(1.0));
        assert_eq!(*events.borrow(), 0);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut controls = controls(options_with(0.0, 150.0));
        controls.resize(1000.0, 500.0);
        assert_eq!(controls.viewport(), Viewport::new(1000.0, 500.0));
        assert!((controls.camera().aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_ndc() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.to_ndc(400.0, 300.0), Vec2::ZERO);
        assert_eq!(viewport.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
    }
}
