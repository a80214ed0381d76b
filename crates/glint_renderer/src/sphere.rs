//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use glint_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// Which side of a sphere's surface counts as its front.
///
/// `Shell` inverts the outward normal so the interior surface is the front
/// face, which is how a hollow transmissive shell (an air bubble inside a
/// glass sphere) is modeled. The original formulation overloaded the sign of
/// the radius to carry this; here it is an explicit flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Exterior surface faces outward.
    Solid,
    /// Interior surface faces outward (hollow shell).
    Shell,
}

/// A sphere primitive.
///
/// The material is shared, not owned: any number of spheres may reference
/// the same material instance.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    facing: Facing,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a solid sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self::with_facing(center, radius, Facing::Solid, material)
    }

    /// Create a hollow shell whose interior surface is the front face.
    pub fn shell(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self::with_facing(center, radius, Facing::Shell, material)
    }

    /// Create a sphere with an explicit facing.
    pub fn with_facing(
        center: Vec3,
        radius: f32,
        facing: Facing,
        material: Arc<dyn Material>,
    ) -> Self {
        Self {
            center,
            radius: radius.abs(),
            facing,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // Substitute the ray into the sphere equation and solve the
        // resulting quadratic.
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        // Tangency (discriminant exactly zero) counts as a miss.
        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Accept the nearest root strictly inside the interval.
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let mut outward_normal = (ray.at(root) - self.center) / self.radius;
        if self.facing == Facing::Shell {
            outward_normal = -outward_normal;
        }

        Some(HitRecord::new(
            ray,
            root,
            outward_normal,
            self.material.as_ref(),
        ))
    }
}
