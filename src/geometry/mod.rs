//! Ray/plane geometry used to anchor the camera against its target plane.

/// Infinite plane in Hessian normal form.
pub mod plane;
/// Half-lines with plane intersection queries.
pub mod ray;

use glam::Vec3;
pub use plane::Plane;
pub use ray::Ray;

/// Below this magnitude a ray direction is treated as parallel to a plane.
pub const EPSILON: f32 = 1e-6;

/// Linear interpolation between two points.
///
/// `alpha` is not clamped; values outside `[0, 1]` extrapolate along the
/// line through `a` and `b`.
#[inline]
#[must_use]
pub fn lerp3(a: Vec3, b: Vec3, alpha: f32) -> Vec3 {
    a + (b - a) * alpha
}

/// Point at `max_distance` from `max_anchor`, on the line back toward
/// `camera`.
///
/// This is where the camera sits when fully zoomed out with the zoom
/// centered on `max_anchor`.
#[must_use]
pub fn min_zoom_anchor(camera: Vec3, max_anchor: Vec3, max_distance: f32) -> Vec3 {
    max_anchor + (camera - max_anchor).normalize_or_zero() * max_distance
}
