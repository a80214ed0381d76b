//! Material trait for surface scattering.

use crate::hittable::HitRecord;
use crate::sample::{gen_f32, random_in_unit_sphere, random_unit_vector};
use glint_math::{unit_vector, InvalidVectorError, Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter: the continuation ray plus the
/// component-wise color filter applied to whatever it goes on to see.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    pub ray: Ray,
    pub attenuation: Color,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials are immutable values shared by any number of surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray at an intersection.
    ///
    /// `Ok(Some(..))` carries the scattered ray and attenuation,
    /// `Ok(None)` means the ray was absorbed and the path ends there.
    /// The only error is a degenerate incoming direction that cannot be
    /// normalized.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Scatter>, InvalidVectorError>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Scatter>, InvalidVectorError> {
        // Offsetting a unit sphere by the normal approximates a
        // cosine-weighted distribution around it.
        let scatter_direction = rec.normal + random_unit_vector(rng);

        Ok(Some(Scatter {
            ray: Ray::new(rec.p, scatter_direction),
            attenuation: self.albedo,
        }))
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: the color of the metal
    /// - `fuzz`: roughness, 0.0 = perfect mirror, capped at 1.0
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.min(1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Scatter>, InvalidVectorError> {
        let reflected = reflect(unit_vector(ray_in.direction())?, rec.normal);

        // Grazing rays whose perturbed reflection would dive below the
        // surface are absorbed rather than scattered.
        if reflected.dot(rec.normal) <= 0.0 {
            return Ok(None);
        }

        let scattered = reflected + self.fuzz * random_in_unit_sphere(rng);
        Ok(Some(Scatter {
            ray: Ray::new(rec.p, scattered),
            attenuation: self.albedo,
        }))
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    /// Schlick's approximation for reflectance
    fn reflectance(cosine: f32, ratio: f32) -> f32 {
        let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Scatter>, InvalidVectorError> {
        // Entering the medium uses the reciprocal ratio; exiting uses the
        // index itself.
        let refraction_ratio = if rec.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit_direction = unit_vector(ray_in.direction())?;
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Total internal reflection forces a mirror bounce; otherwise the
        // Fresnel term decides stochastically between reflecting and
        // refracting. Each sampled ray takes exactly one of the two paths.
        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction =
            if cannot_refract || gen_f32(rng) < Self::reflectance(cos_theta, refraction_ratio) {
                reflect(unit_direction, rec.normal)
            } else {
                refract(unit_direction, rec.normal, refraction_ratio)
            };

        Ok(Some(Scatter {
            ray: Ray::new(rec.p, direction),
            attenuation: Color::ONE,
        }))
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with the given refraction ratio.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
