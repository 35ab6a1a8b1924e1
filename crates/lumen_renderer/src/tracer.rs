//! The recursive ray-shoot driver.

use lumen_core::Config;
use lumen_math::{Interval, Ray};
use rand::RngCore;

use crate::material::Color;
use crate::scene::Scene;

/// Lower interval bound for every scene query. Keeps a bounced ray from
/// re-hitting the surface it just left.
pub const T_EPSILON: f32 = 1e-4;

/// Sky gradient for a ray that misses everything: linear blend from the
/// bottom color to the top color over the direction's y component. The
/// miss path involves no randomness.
pub fn sky_color(ray: &Ray, config: &Config) -> Color {
    let t = 0.5 * (ray.direction.y + 1.0);
    config.sky_color_bottom.lerp(config.sky_color_top, t)
}

/// Trace one ray into the scene.
///
/// This is the single recursion point: every material bounce calls back
/// in here with `depth + 1`, so call depth is bounded by the config's
/// bounce budget and branching by its rays-per-bounce.
pub fn shoot_ray(
    ray: &Ray,
    scene: &Scene,
    config: &Config,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    match scene.hit(ray, Interval::new(T_EPSILON, f32::INFINITY)) {
        Some(hit) => hit.material.shade(ray, &hit, scene, config, depth, rng),
        None => sky_color(ray, config),
    }
}
