//! Damped zoom/pan motion along the fixed camera-to-plane ray.
//!
//! The camera never rotates. Its position is a point on the segment between
//! two anchors: the far anchor where the view ray meets the target plane and
//! the near anchor `max_distance` back toward the camera. Panning translates
//! both anchors rigidly; zooming slides the camera between them.

use glam::Vec3;

use crate::error::ControlsError;
use crate::geometry::{lerp3, min_zoom_anchor, Plane, Ray, EPSILON};

/// Fraction of the remaining zoom distance covered per step.
pub const DAMPING_ALPHA: f32 = 0.1;
/// Fraction of the remaining pan offset covered per step.
pub const PAN_DAMPING_ALPHA: f32 = 0.1;

/// Where the camera first looks: cast along the plane normal, first against
/// it and then with it, and take the first hit.
pub fn find_plane_anchor(
    camera: Vec3,
    plane: &Plane,
) -> Result<Vec3, ControlsError> {
    let anchor = [-1.0_f32, 1.0]
        .into_iter()
        .find_map(|sign| {
            Ray::new(camera, plane.normal * sign).intersect_plane(plane)
        })
        .ok_or(ControlsError::NoPlaneIntersection)?;

    if anchor.distance(camera) < EPSILON {
        return Err(ControlsError::CameraOnPlane);
    }
    Ok(anchor)
}

/// Zoom distance, pan offset, and the two zoom anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionModel {
    target_zoom: f32,
    current_zoom: f32,
    pan_target: Vec3,
    pan_current: Vec3,
    min_zoom_position: Vec3,
    max_zoom_position: Vec3,
    orientation: Vec3,
}

impl MotionModel {
    /// Start at rest with the camera at `camera`, looking at `anchor` on the
    /// target plane.
    #[must_use]
    pub fn new(camera: Vec3, anchor: Vec3, max_distance: f32) -> Self {
        let to_plane = anchor - camera;
        let distance = to_plane.length();
        Self {
            target_zoom: distance,
            current_zoom: distance,
            pan_target: Vec3::ZERO,
            pan_current: Vec3::ZERO,
            min_zoom_position: min_zoom_anchor(camera, anchor, max_distance),
            max_zoom_position: anchor,
            orientation: to_plane.normalize_or_zero(),
        }
    }

    /// Advance one frame and return the new camera position.
    ///
    /// The target distance is clamped to `[min_distance, max_distance]`
    /// before the current distance is damped toward it. The current distance
    /// itself is never clamped, so after a recenter past `max_distance` the
    /// camera starts just beyond the near anchor and eases onto the segment.
    pub fn step(&mut self, min_distance: f32, max_distance: f32) -> Vec3 {
        self.target_zoom = self.target_zoom.min(max_distance).max(min_distance);
        // current may sit outside the bounds after a recenter; it damps back
        // in like any other gap
        self.current_zoom -=
            (self.current_zoom - self.target_zoom) * DAMPING_ALPHA;
        let zoom_alpha = 1.0 - self.current_zoom / max_distance;

        let offset_max = self.max_zoom_position - self.pan_current;
        let offset_min = self.min_zoom_position - self.pan_current;

        // move anchors to the panned location
        self.pan_current = self.pan_current.lerp(self.pan_target, PAN_DAMPING_ALPHA);

        self.max_zoom_position = self.pan_current + offset_max;
        self.min_zoom_position = self.pan_current + offset_min;

        lerp3(self.min_zoom_position, self.max_zoom_position, zoom_alpha)
    }

    /// Move the target distance closer by `scale` (< 1 for a real zoom).
    pub fn zoom_in(&mut self, scale: f32) {
        self.target_zoom *= scale;
    }

    /// Move the target distance away by `scale`.
    pub fn zoom_out(&mut self, scale: f32) {
        self.target_zoom /= scale;
    }

    /// Accumulate a world-space pan offset.
    pub fn add_pan(&mut self, delta: Vec3) {
        self.pan_target += delta;
    }

    /// Re-center zoom on a new plane point without moving the camera.
    ///
    /// Both distances snap to the camera's current distance from `anchor`
    /// so the next step starts from rest.
    pub fn recenter(&mut self, camera: Vec3, anchor: Vec3, max_distance: f32) {
        self.max_zoom_position = anchor;
        self.min_zoom_position = min_zoom_anchor(camera, anchor, max_distance);
        let distance = anchor.distance(camera);
        self.target_zoom = distance;
        self.current_zoom = distance;
    }

    /// Desired camera-to-anchor distance.
    #[must_use]
    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Damped camera-to-anchor distance.
    #[must_use]
    pub fn current_zoom(&self) -> f32 {
        self.current_zoom
    }

    /// Accumulated pan offset the model is heading toward.
    #[must_use]
    pub fn pan_target(&self) -> Vec3 {
        self.pan_target
    }

    /// Pan offset actually applied.
    #[must_use]
    pub fn pan_current(&self) -> Vec3 {
        self.pan_current
    }

    /// Near anchor (camera position at `max_distance`).
    #[must_use]
    pub fn min_zoom_position(&self) -> Vec3 {
        self.min_zoom_position
    }

    /// Far anchor on the target plane.
    #[must_use]
    pub fn max_zoom_position(&self) -> Vec3 {
        self.max_zoom_position
    }

    /// Unit camera-to-plane direction fixed at construction.
    #[must_use]
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }
}
