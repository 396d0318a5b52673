use glam::{Mat4, Quat, Vec2, Vec3};

use super::core::{look_rotation, ControlledCamera, ProjectionKind};
use crate::geometry::Ray;

/// Camera with a parallel projection over a fixed view box.
///
/// Panning works, but the map controls refuse to dolly it and switch zoom
/// off when asked to.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Orientation; the camera looks along local -Z.
    pub rotation: Quat,
    /// Up direction used by [`ControlledCamera::look_at`].
    pub up: Vec3,
    /// Left edge of the view box.
    pub left: f32,
    /// Right edge of the view box.
    pub right: f32,
    /// Top edge of the view box.
    pub top: f32,
    /// Bottom edge of the view box.
    pub bottom: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Magnification of the view box.
    pub zoom: f32,
    projection: Mat4,
}

impl OrthographicCamera {
    /// Create a camera at `eye` viewing a box `half_height` tall above and
    /// below center, widened by `aspect`.
    pub fn new(eye: Vec3, half_height: f32, aspect: f32) -> Self {
        let mut camera = Self {
            eye,
            rotation: Quat::IDENTITY,
            up: Vec3::Y,
            left: -half_height * aspect,
            right: half_height * aspect,
            top: half_height,
            bottom: -half_height,
            znear: 0.1,
            zfar: 10_000.0,
            zoom: 1.0,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.eye).inverse()
    }

    /// Get the projection matrix as of the last
    /// [`update_projection`](ControlledCamera::update_projection).
    pub fn build_projection(&self) -> Mat4 {
        self.projection
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

impl ControlledCamera for OrthographicCamera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.rotation = look_rotation(self.eye, target, self.up);
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    fn set_aspect(&mut self, aspect: f32) {
        let half_width = (self.top - self.bottom) * 0.5 * aspect;
        let center = (self.left + self.right) * 0.5;
        self.left = center - half_width;
        self.right = center + half_width;
        self.update_projection();
    }

    fn update_projection(&mut self) {
        let dx = (self.right - self.left) / (2.0 * self.zoom);
        let dy = (self.top - self.bottom) / (2.0 * self.zoom);
        let cx = (self.right + self.left) * 0.5;
        let cy = (self.top + self.bottom) * 0.5;
        self.projection = Mat4::orthographic_rh(
            cx - dx,
            cx + dx,
            cy - dy,
            cy + dy,
            self.znear,
            self.zfar,
        );
    }

    fn projection(&self) -> ProjectionKind {
        ProjectionKind::Orthographic
    }

    fn local_axes(&self) -> (Vec3, Vec3) {
        (self.rotation * Vec3::X, self.rotation * Vec3::Y)
    }

    fn view_half_height(&self, _distance: f32) -> f32 {
        (self.top - self.bottom) / (2.0 * self.zoom)
    }

    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.build_matrix().inverse();
        let origin = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        Ray::new(origin, self.rotation * Vec3::NEG_Z)
    }
}
