//! Pinhole camera for ray generation.

use glint_math::{Ray, Vec3};

/// A fixed pinhole camera at the world origin.
///
/// Unit focal length, 2x2 viewport in the z = -1 plane. Configurability is
/// deliberately absent; the camera only maps normalized screen coordinates
/// to world-space rays.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Vec3,
}

impl Camera {
    /// Create the camera.
    pub fn new() -> Self {
        let origin = Vec3::ZERO;
        let focal_length = 1.0;

        let viewport_height = 2.0;
        let viewport_width = 2.0;

        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Generate the ray through normalized screen coordinates (u, v),
    /// each in [0, 1], measured from the lower-left corner.
    pub fn ray(&self, u: f32, v: f32) -> Ray {
        let direction =
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;
        Ray::new(self.origin, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_down_negative_z() {
        let camera = Camera::new();
        let ray = camera.ray(0.5, 0.5);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_corner_rays_span_the_viewport() {
        let camera = Camera::new();

        let lower_left = camera.ray(0.0, 0.0);
        assert!((lower_left.direction() - Vec3::new(-1.0, -1.0, -1.0)).length() < 1e-6);

        let upper_right = camera.ray(1.0, 1.0);
        assert!((upper_right.direction() - Vec3::new(1.0, 1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_all_rays_share_the_pinhole_origin() {
        let camera = Camera::new();
        for (u, v) in [(0.0, 0.0), (0.25, 0.75), (1.0, 0.5)] {
            assert_eq!(camera.ray(u, v).origin(), Vec3::ZERO);
        }
    }
}
