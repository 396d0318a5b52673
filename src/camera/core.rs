use glam::{Mat3, Quat, Vec2, Vec3};

use crate::geometry::{Ray, EPSILON};

/// Kind of projection a camera uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Perspective projection; the only kind that supports dolly.
    Perspective,
    /// Parallel projection.
    Orthographic,
}

/// What the map controls need from a host camera.
///
/// The controls write the camera position every frame and orient it exactly
/// once at construction; they never rotate it afterwards.
pub trait ControlledCamera {
    /// World-space position.
    fn position(&self) -> Vec3;

    /// Move the camera without changing its orientation.
    fn set_position(&mut self, position: Vec3);

    /// Rotate the camera to face `target` from its current position.
    fn look_at(&mut self, target: Vec3);

    /// Projection zoom factor.
    fn zoom(&self) -> f32;

    /// Set the projection zoom factor. Takes effect on the next
    /// [`update_projection`](Self::update_projection).
    fn set_zoom(&mut self, zoom: f32);

    /// Viewport aspect ratio (width / height) changed.
    fn set_aspect(&mut self, aspect: f32);

    /// Recompute the projection after its parameters changed.
    fn update_projection(&mut self);

    /// Which projection this camera uses.
    fn projection(&self) -> ProjectionKind;

    /// World-space directions of the camera's local X (right) and Y (up)
    /// axes.
    fn local_axes(&self) -> (Vec3, Vec3);

    /// World-space half height of the view at `distance` in front of the
    /// camera.
    fn view_half_height(&self, distance: f32) -> f32;

    /// Picking ray through a point in normalized device coordinates
    /// (`x`, `y` in `[-1, 1]`, `y` up).
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray;
}

/// Rotation that makes a camera at `eye` look toward `target`, with its
/// local -Z axis forward and its local Y axis as close to `up` as possible.
///
/// When the view direction is parallel to `up`, the forward axis is nudged
/// off the degenerate line so that a top-down view keeps +X as screen right.
pub fn look_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let mut back = eye - target;
    if back.length_squared() < EPSILON * EPSILON {
        back = Vec3::Z;
    }
    let mut back = back.normalize();

    let mut right = up.cross(back);
    if right.length_squared() < EPSILON * EPSILON {
        if (up.z.abs() - 1.0).abs() < EPSILON {
            back.x += 1e-4;
        } else {
            back.z += 1e-4;
        }
        back = back.normalize();
        right = up.cross(back);
    }
    let right = right.normalize();
    let cam_up = back.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, cam_up, back))
}
