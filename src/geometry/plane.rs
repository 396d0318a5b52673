use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Ground plane `y = 0` with its normal pointing up.
    pub const GROUND: Self = Self {
        normal: Vec3::Y,
        distance: 0.0,
    };

    /// Create a plane from coefficients and normalize it
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let len = (a * a + b * b + c * c).sqrt();
        if len > 0.0 {
            Self {
                normal: Vec3::new(a / len, b / len, c / len),
                distance: d / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Plane through `point` with the given (not necessarily unit) normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize_or_zero();
        Self {
            normal: n,
            distance: -n.dot(point),
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// The point on the plane closest to the origin.
    #[inline]
    pub fn coplanar_point(&self) -> Vec3 {
        self.normal * -self.distance
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::GROUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_point_normal_normalizes() {
        let plane =
            Plane::from_point_normal(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(plane.normal, Vec3::Y);
        assert_eq!(plane.distance, -5.0);
        assert_eq!(plane.distance_to_point(Vec3::new(1.0, 7.0, -2.0)), 2.0);
    }

    #[test]
    fn test_coplanar_point_lies_on_plane() {
        let plane = Plane::from_coefficients(1.0, 1.0, 0.0, -4.0);
        let p = plane.coplanar_point();
        assert!(plane.distance_to_point(p).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_coefficients() {
        let plane = Plane::from_coefficients(0.0, 0.0, 0.0, 3.0);
        assert_eq!(plane.normal, Vec3::ZERO);
        assert_eq!(plane.distance, 0.0);
    }
}
