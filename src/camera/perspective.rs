use glam::{Mat4, Quat, Vec2, Vec3};

use super::core::{look_rotation, ControlledCamera, ProjectionKind};
use crate::geometry::Ray;

/// Perspective camera defined by eye position, orientation, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Orientation; the camera looks along local -Z.
    pub rotation: Quat,
    /// Up direction used by [`ControlledCamera::look_at`].
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Zoom factor applied to the field of view.
    pub zoom: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    /// Create a camera at `eye` with identity orientation.
    pub fn new(eye: Vec3, fovy: f32, aspect: f32) -> Self {
        let mut camera = Self {
            eye,
            rotation: Quat::IDENTITY,
            up: Vec3::Y,
            aspect,
            fovy,
            znear: 0.1,
            zfar: 10_000.0,
            zoom: 1.0,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Vertical field of view after zoom, in degrees.
    pub fn effective_fovy(&self) -> f32 {
        let half = (self.fovy.to_radians() * 0.5).tan() / self.zoom;
        (2.0 * half.atan()).to_degrees()
    }

    /// Camera forward direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
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

impl ControlledCamera for PerspectiveCamera {
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
        self.aspect = aspect;
        self.update_projection();
    }

    fn update_projection(&mut self) {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        self.projection = Mat4::perspective_rh(
            self.effective_fovy().to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    fn projection(&self) -> ProjectionKind {
        ProjectionKind::Perspective
    }

    fn local_axes(&self) -> (Vec3, Vec3) {
        (self.rotation * Vec3::X, self.rotation * Vec3::Y)
    }

    fn view_half_height(&self, distance: f32) -> f32 {
        // half of the fov is center to top of screen
        distance * (self.fovy * 0.5).to_radians().tan()
    }

    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.build_matrix().inverse();
        let through = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.9));
        Ray::new(self.eye, through - self.eye)
    }
}
