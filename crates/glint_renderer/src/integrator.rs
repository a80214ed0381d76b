//! Recursive shading: composes camera rays, scene intersection, and
//! material scattering into a per-sample color.

use crate::material::Color;
use crate::Hittable;
use glint_math::{unit_vector, Interval, InvalidVectorError, Ray};
use rand::RngCore;

/// Lower bound for intersection queries.
///
/// A small positive value instead of zero, so a scattered ray cannot re-hit
/// the surface it just left through floating-point self-intersection.
pub const T_MIN_EPSILON: f32 = 1e-3;

/// Compute the color seen along a ray.
///
/// Recurses through material scattering until the ray is absorbed, escapes
/// to the sky, or `depth` reaches zero. The depth cap is a correctness
/// requirement: scattering alone gives no termination guarantee (two facing
/// mirrors bounce forever).
pub fn ray_color(
    ray: &Ray,
    scene: &dyn Hittable,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Result<Color, InvalidVectorError> {
    // Bounce budget exhausted: all remaining energy is absorbed.
    if depth == 0 {
        return Ok(Color::ZERO);
    }

    let rec = match scene.hit(ray, Interval::new(T_MIN_EPSILON, f32::INFINITY)) {
        Some(rec) => rec,
        None => return sky_gradient(ray),
    };

    match rec.material.scatter(ray, &rec, rng)? {
        Some(scatter) => {
            let incoming = ray_color(&scatter.ray, scene, depth - 1, rng)?;
            Ok(scatter.attenuation * incoming)
        }
        // Absorbed: a designed terminal state, not an error.
        None => Ok(Color::ZERO),
    }
}

/// Background for rays that miss everything: a vertical white-to-blue lerp.
fn sky_gradient(ray: &Ray) -> Result<Color, InvalidVectorError> {
    let unit_direction = unit_vector(ray.direction())?;
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    Ok((1.0 - t) * white + t * blue)
}
