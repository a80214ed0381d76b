//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Built as a value and returned, never filled in through an out-parameter,
/// so a nearer candidate found later can never leave a half-written record
/// behind. Borrows the struck material from the geometry that owns it.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Geometric outward normal of the surface (unit length)
    pub outward_normal: Vec3,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Face-adjusted normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the struck geometry's outward normal.
    ///
    /// `front_face` is true when the ray arrives from the outside
    /// (`dot(direction, outward_normal) < 0`); the stored `normal` is the
    /// outward normal on a front-face hit and its negation otherwise, so the
    /// flag and the normal are always mutually consistent.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: &'a dyn Material) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            t,
            p: ray.at(t),
            outward_normal,
            front_face,
            normal,
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test the ray against this object over the parameter interval `ray_t`.
    ///
    /// Returns the nearest intersection strictly inside `ray_t`, or `None`
    /// on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}
