//! Point lights and direct lighting.

use lumen_core::Config;
use lumen_math::{Interval, Ray, Vec3};
use rand::RngCore;

use crate::hit::HitRecord;
use crate::material::{Color, PhongParams};
use crate::sampling::{random_in_unit_sphere, reflect};
use crate::scene::Scene;
use crate::tracer::T_EPSILON;

/// Shadow target jitter radius as a fraction of the distance to the
/// light. Only the occlusion ray is jittered; the lighting terms use the
/// exact direction, so unoccluded lighting stays deterministic.
const SHADOW_JITTER: f32 = 0.05;

/// A light radiating equally in all directions from a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub power: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, power: f32) -> Self {
        Self {
            position,
            color,
            power,
        }
    }

    /// Direct diffuse + specular contribution at a shading point,
    /// averaged over `light_rays` stochastic shadow samples.
    ///
    /// Each sample jitters only the occlusion test, which softens shadow
    /// edges; an occluded sample contributes nothing.
    pub fn illuminate(
        &self,
        base: &PhongParams,
        ray: &Ray,
        hit: &HitRecord,
        scene: &Scene,
        config: &Config,
        rng: &mut dyn RngCore,
    ) -> Color {
        let to_light = self.position - hit.point;
        let distance = to_light.length();
        let light_dir = to_light / distance;

        let mut sum = Color::ZERO;
        for _ in 0..config.light_rays {
            let jitter = random_in_unit_sphere(rng) * distance * SHADOW_JITTER;
            let shadow = Ray::new(hit.point, to_light + jitter);
            if scene.hit(&shadow, Interval::new(T_EPSILON, distance)).is_some() {
                continue;
            }

            let diffuse =
                (1.0 - base.reflectivity) * hit.normal.dot(light_dir).max(0.0) * self.power;
            let reflected = reflect(-light_dir, hit.normal);
            let view = -ray.direction;
            let specular = reflected.dot(view).max(0.0).powf(base.shininess) * self.power;

            sum += self.color * (diffuse + specular);
        }

        sum / config.light_rays as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::object::Object;
    use crate::sphere::Sphere;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base() -> PhongParams {
        PhongParams {
            diffuse: Vec3::splat(0.5),
            reflectivity: 0.0,
            shininess: 1.0,
        }
    }

    fn head_on_hit(material: &Material) -> HitRecord<'_> {
        HitRecord {
            t: 4.0,
            point: Vec3::new(0.0, 0.0, -4.0),
            normal: Vec3::Z,
            material,
        }
    }

    #[test]
    fn test_unoccluded_light_is_deterministic() {
        let material = Material::lambertian(Vec3::splat(0.5));
        let hit = head_on_hit(&material);
        let scene = Scene::new();
        let config = Config::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let light = PointLight::new(Vec3::ZERO, Vec3::ONE, 0.5);

        // Light sits along the normal: N.L = 1 and the mirror of the light
        // direction lines up with the view, so both terms hit their peak.
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = light.illuminate(&base(), &ray, &hit, &scene, &config, &mut rng_a);
        let b = light.illuminate(&base(), &ray, &hit, &scene, &config, &mut rng_b);

        assert!((a - Vec3::splat(1.0)).length() < 1e-5);
        assert!((a - b).length() < 1e-6);
    }

    #[test]
    fn test_light_behind_surface_contributes_no_diffuse() {
        let material = Material::lambertian(Vec3::splat(0.5));
        let hit = head_on_hit(&material);
        let scene = Scene::new();
        let config = Config::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Directly behind the surface along -normal
        let light = PointLight::new(Vec3::new(0.0, 0.0, -8.0), Vec3::ONE, 1.0);
        let mut rng = StdRng::seed_from_u64(2);
        let color = light.illuminate(&base(), &ray, &hit, &scene, &config, &mut rng);

        // N.L clamps to zero; the specular mirror direction also points away
        assert!(color.length() < 1e-6);
    }

    #[test]
    fn test_occluder_blocks_light() {
        let material = Material::lambertian(Vec3::splat(0.5));
        let hit = head_on_hit(&material);
        let config = Config::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let light = PointLight::new(Vec3::ZERO, Vec3::ONE, 1.0);

        // A big sphere between the shading point and the light swallows
        // every jittered shadow ray.
        let mut scene = Scene::new();
        scene.add_object(
            "blocker",
            Object::Sphere(Sphere::new(
                Vec3::new(0.0, 0.0, -2.0),
                1.0,
                Material::lambertian(Vec3::ONE),
            )),
        );

        let mut rng = StdRng::seed_from_u64(3);
        let color = light.illuminate(&base(), &ray, &hit, &scene, &config, &mut rng);
        assert_eq!(color, Color::ZERO);
    }
}
