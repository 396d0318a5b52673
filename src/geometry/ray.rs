use glam::Vec3;

use super::{Plane, EPSILON};

/// Half-line starting at `origin` and running along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to `plane`, or `None` when the ray runs
    /// parallel to it or the plane lies behind the origin.
    ///
    /// A parallel ray whose origin is on the plane hits at distance zero.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f32> {
        let denominator = plane.normal.dot(self.direction);
        if denominator.abs() < EPSILON {
            if plane.distance_to_point(self.origin).abs() < EPSILON {
                return Some(0.0);
            }
            return None;
        }

        let t = -plane.distance_to_point(self.origin) / denominator;
        (t >= 0.0).then_some(t)
    }

    /// Point where the ray crosses `plane`, if it does.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }
}
