//! Material scattering and shading.
//!
//! Materials are a closed enum dispatched by pattern match; every lit
//! variant funnels into the same Phong combination of direct lighting
//! and recursively gathered indirect light. Only the scattering law that
//! produces the indirect rays differs per variant.

use lumen_core::Config;
use lumen_math::{Ray, Vec3};
use rand::RngCore;

use crate::hit::HitRecord;
use crate::sampling::{random_in_unit_sphere, reflect, refract_or_reflect};
use crate::scene::Scene;
use crate::tracer::shoot_ray;

/// Linear RGB radiance. Channels are unbounded until the framebuffer
/// clamps them at 8-bit conversion.
pub type Color = Vec3;

/// Lighting parameters shared by every lit material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongParams {
    pub diffuse: Color,
    pub reflectivity: f32,
    pub shininess: f32,
}

/// Surface material.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambertian { base: PhongParams },
    Metal { base: PhongParams, fuzz: f32 },
    Dielectric {
        index: f32,
        reflectivity: f32,
        shininess: f32,
    },
    Phong { base: PhongParams },
    Emissive { emission: Color },
}

/// Indirect-ray scattering law.
enum Scatter {
    /// Uniform hemisphere bias: unit(normal + point in unit ball).
    Diffuse,
    /// Mirror reflection, optionally perturbed by fuzz.
    Mirror { fuzz: f32 },
}

impl Scatter {
    fn direction(&self, ray: &Ray, hit: &HitRecord, rng: &mut dyn RngCore) -> Vec3 {
        match self {
            Scatter::Diffuse => hit.normal + random_in_unit_sphere(rng),
            Scatter::Mirror { fuzz } => {
                reflect(ray.direction, hit.normal) + *fuzz * random_in_unit_sphere(rng)
            }
        }
    }
}

impl Material {
    /// Diffuse scatterer. Lambertians take no specular part to speak of:
    /// zero reflectivity and a shininess of 1.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian {
            base: PhongParams {
                diffuse: albedo,
                reflectivity: 0.0,
                shininess: 1.0,
            },
        }
    }

    pub fn metal(albedo: Color, reflectivity: f32, shininess: f32, fuzz: f32) -> Self {
        Material::Metal {
            base: PhongParams {
                diffuse: albedo,
                reflectivity,
                shininess,
            },
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn dielectric(index: f32, reflectivity: f32, shininess: f32) -> Self {
        Material::Dielectric {
            index,
            reflectivity,
            shininess,
        }
    }

    pub fn phong(albedo: Color, reflectivity: f32, shininess: f32) -> Self {
        Material::Phong {
            base: PhongParams {
                diffuse: albedo,
                reflectivity,
                shininess,
            },
        }
    }

    pub fn emissive(emission: Color) -> Self {
        Material::Emissive { emission }
    }

    /// Color of the surface at `hit` as seen along `ray`.
    ///
    /// Emissive surfaces short-circuit: constant emission, no recursion,
    /// no depth check. Every other variant terminates to black once
    /// `depth` exceeds the bounce budget; a terminated path gathers no
    /// further radiance.
    pub fn shade(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        scene: &Scene,
        config: &Config,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        match self {
            Material::Emissive { emission } => *emission,
            _ if depth > config.max_bounces => Color::ZERO,
            Material::Lambertian { base } => {
                lit_color(base, Scatter::Diffuse, ray, hit, scene, config, depth, rng)
            }
            Material::Metal { base, fuzz } => lit_color(
                base,
                Scatter::Mirror { fuzz: *fuzz },
                ray,
                hit,
                scene,
                config,
                depth,
                rng,
            ),
            Material::Phong { base } => lit_color(
                base,
                Scatter::Mirror { fuzz: 0.0 },
                ray,
                hit,
                scene,
                config,
                depth,
                rng,
            ),
            Material::Dielectric {
                index,
                reflectivity,
                shininess,
            } => {
                // Stage 1: what shows through the surface. Average a batch
                // of refraction samples; each one independently resolves
                // entering/exiting and the Schlick reflect-vs-refract draw.
                let mut gathered = Color::ZERO;
                for _ in 0..config.rays_per_bounce {
                    let direction = refract_or_reflect(ray.direction, hit.normal, *index, rng);
                    let refracted = Ray::new(hit.point, direction);
                    gathered += shoot_ray(&refracted, scene, config, depth + 1, rng);
                }
                let through = gathered / config.rays_per_bounce as f32;

                // Stage 2: light the surface as a perfect mirror whose
                // diffuse color is whatever came through.
                let base = PhongParams {
                    diffuse: through,
                    reflectivity: *reflectivity,
                    shininess: *shininess,
                };
                lit_color(
                    &base,
                    Scatter::Mirror { fuzz: 0.0 },
                    ray,
                    hit,
                    scene,
                    config,
                    depth,
                    rng,
                )
            }
        }
    }
}

/// Shared lit path: gather indirect light along scattered rays, sum
/// direct light over the scene's lights, combine.
///
/// The diffuse color tints the direct term; the indirect tint slides
/// from albedo-modulated to untinted as reflectivity approaches a
/// perfect mirror.
#[allow(clippy::too_many_arguments)]
fn lit_color(
    base: &PhongParams,
    scatter: Scatter,
    ray: &Ray,
    hit: &HitRecord,
    scene: &Scene,
    config: &Config,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut gathered = Color::ZERO;
    for _ in 0..config.rays_per_bounce {
        let bounced = Ray::new(hit.point, scatter.direction(ray, hit, rng));
        gathered += shoot_ray(&bounced, scene, config, depth + 1, rng);
    }
    let indirect = gathered / config.rays_per_bounce as f32;

    let mut direct = Color::ZERO;
    for light in scene.lights() {
        direct += light.illuminate(base, ray, hit, scene, config, rng);
    }

    let tint = base.diffuse.lerp(Color::ONE, base.reflectivity);
    base.diffuse * direct + indirect * tint
}
