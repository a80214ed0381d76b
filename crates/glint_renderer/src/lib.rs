//! glint renderer - recursive CPU ray tracing.
//!
//! Casts rays from a pinhole camera through a pixel grid, resolves the
//! nearest intersection against the scene, and recursively evaluates how
//! surface materials scatter light until a ray is absorbed, escapes to the
//! sky, or exhausts the bounce budget.
//!
//! Scene geometry and materials are built once and then read-only; pixel
//! evaluation shares no mutable state, so the driver renders scanlines in
//! parallel with per-scanline seeded RNG streams.

mod camera;
mod hittable;
mod integrator;
mod material;
mod render;
mod sample;
mod scene;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use integrator::{ray_color, T_MIN_EPSILON};
pub use material::{reflect, refract, Color, Dielectric, Lambertian, Material, Metal, Scatter};
pub use render::{render, render_pixel, ImageBuffer, RenderConfig};
pub use sample::{gen_f32, gen_range, random_in_unit_sphere, random_unit_vector, random_vec3};
pub use scene::Scene;
pub use sphere::{Facing, Sphere};

/// Re-export common math types from glint_math
pub use glint_math::{unit_vector, Interval, InvalidVectorError, Ray, Vec3};
