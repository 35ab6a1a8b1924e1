//! Random sampling and optics helpers.
//!
//! Randomness is threaded through the whole call chain as
//! `&mut dyn RngCore`; `gen_f32` is the single uniform-float source.

use rand::RngCore;

use lumen_math::Vec3;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Rejection-sampled uniform point in the unit ball.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Reflect `v` about unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Snell refraction of unit vector `v` through unit normal `n`.
/// Returns None on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let dt = v.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (v - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for reflectance.
pub fn schlick(cosine: f32, index: f32) -> f32 {
    let r0 = ((1.0 - index) / (1.0 + index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Pick the outgoing direction at a dielectric interface.
///
/// The outward normal and index ratio follow from which side of the
/// surface the ray is on. Total internal reflection always reflects;
/// otherwise Schlick's approximation gives the reflection probability.
pub fn refract_or_reflect(
    direction: Vec3,
    normal: Vec3,
    index: f32,
    rng: &mut dyn RngCore,
) -> Vec3 {
    let d_dot_n = direction.dot(normal);
    let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
        // Exiting the surface
        (-normal, index, index * d_dot_n)
    } else {
        (normal, 1.0 / index, -d_dot_n)
    };

    match refract(direction, outward_normal, ni_over_nt) {
        Some(refracted) if schlick(cosine, index) <= gen_f32(rng) => refracted,
        _ => reflect(direction, normal),
    }
}
