//! Render the classic three-sphere scene and print a few probe pixels.
//!
//! Run with `RUST_LOG=info cargo run --example three_spheres --release`.
//! Image output is out of scope for this crate; the linear pixel buffer is
//! what a front end would hand to its encoder.

use glint_renderer::{
    render, Camera, Color, Dielectric, Lambertian, Metal, RenderConfig, Scene, Sphere, Vec3,
};
use std::sync::Arc;

fn main() {
    env_logger::init();

    let mut scene = Scene::new();

    // Ground, a diffuse ball, a fuzzy metal ball, and a hollow glass shell:
    // a glass sphere with a shell sphere just inside it.
    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
    )));
    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5))),
    )));
    scene.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3)),
    )));

    let glass: Arc<Dielectric> = Arc::new(Dielectric::new(1.5));
    scene.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        glass.clone(),
    )));
    scene.add(Box::new(Sphere::shell(
        Vec3::new(-1.0, 0.0, -1.0),
        0.45,
        glass,
    )));

    let camera = Camera::new();
    let config = RenderConfig {
        width: 200,
        height: 200,
        samples_per_pixel: 50,
        max_depth: 50,
        seed: 7,
    };

    let image = match render(&camera, &scene, &config) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("render failed: {err}");
            std::process::exit(1);
        }
    };

    for (label, x, y) in [
        ("sky", 100, 20),
        ("diffuse", 100, 100),
        ("metal", 180, 100),
        ("glass", 20, 100),
        ("ground", 100, 180),
    ] {
        let c = image.get(x, y);
        println!("{label:>8} ({x:3},{y:3}): {:.3} {:.3} {:.3}", c.x, c.y, c.z);
    }
}
