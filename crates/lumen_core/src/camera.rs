//! Camera description and primary-ray generation.

use std::path::Path;

use lumen_math::{Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::LoadResult;

/// Pinhole camera described by its eye point and image-plane basis.
///
/// The basis is what gets serialized: `upper_left` is the world-space
/// corner of the image plane, `horizontal` and `vertical` span it, and
/// `vertical` points down the image. Normalized pixel coordinates
/// (u, v) in [0,1]^2 map directly onto that plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub origin: Vec3,
    pub upper_left: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl Camera {
    /// Build a camera from a viewing transform.
    ///
    /// `vfov` is the vertical field of view in degrees, `aspect` is
    /// width / height. The image plane sits at unit distance along the
    /// view direction.
    pub fn from_look_at(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * aspect;

        // Camera basis vectors
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        let vertical = -viewport_height * v;
        let upper_left = look_from - w - horizontal / 2.0 - vertical / 2.0;

        Self {
            origin: look_from,
            upper_left,
            horizontal,
            vertical,
        }
    }

    /// Generate the primary ray through normalized image coordinates
    /// (u, v), with (0, 0) the upper-left corner and v growing downward.
    pub fn ray(&self, u: f32, v: f32) -> Ray {
        let target = self.upper_left + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }

    /// Load a camera from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the camera as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> LoadResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::from_look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            90.0,
            16.0 / 9.0,
        );

        let ray = camera.ray(0.5, 0.5);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 5.0));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_v_grows_downward() {
        let camera = Camera::from_look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 1.0);

        let top = camera.ray(0.5, 0.0);
        let bottom = camera.ray(0.5, 1.0);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn test_u_spans_left_to_right() {
        let camera = Camera::from_look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 1.0);

        let left = camera.ray(0.0, 0.5);
        let right = camera.ray(1.0, 0.5);
        assert!(left.direction.x < 0.0);
        assert!(right.direction.x > 0.0);
    }

    #[test]
    fn test_basis_is_orthogonal() {
        let camera = Camera::from_look_at(
            Vec3::new(3.0, 2.0, 7.0),
            Vec3::new(-1.0, 0.5, 0.0),
            Vec3::Y,
            60.0,
            4.0 / 3.0,
        );

        assert!(camera.horizontal.dot(camera.vertical).abs() < 1e-4);
        let view = camera.ray(0.5, 0.5).direction;
        assert!(camera.horizontal.dot(view).abs() < 1e-4);
        assert!(camera.vertical.dot(view).abs() < 1e-4);
    }
}
