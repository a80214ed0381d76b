//! Scene aggregate: an ordered collection of hittables.

use crate::hittable::{HitRecord, Hittable};
use glint_math::{Interval, Ray};

/// An insertion-ordered collection of hittable objects.
///
/// Built once before a render and read-only afterwards; `hit` resolves the
/// globally nearest intersection regardless of insertion order.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord> = None;
        // Shrinking upper bound: each accepted hit tightens the interval for
        // every later candidate, so a farther hit can never displace a
        // nearer one.
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
