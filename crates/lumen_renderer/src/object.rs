//! Top-level scene object.

use lumen_math::{Interval, Ray};

use crate::hit::HitRecord;
use crate::kdtree::KdTree;
use crate::mesh::TriangleMesh;
use crate::plane::InfinitePlane;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Anything the scene can hold at the top level.
///
/// A closed enum keeps intersection dispatch a branch-predictable match
/// instead of a virtual call in the hottest loop of the renderer.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Triangle(Triangle),
    Plane(InfinitePlane),
    Mesh(TriangleMesh),
    KdTree(KdTree),
}

impl Object {
    /// Nearest intersection strictly inside the interval.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, ray_t),
            Object::Triangle(triangle) => triangle.hit(ray, ray_t),
            Object::Plane(plane) => plane.hit(ray, ray_t),
            Object::Mesh(mesh) => mesh.hit(ray, ray_t),
            Object::KdTree(tree) => tree.hit(ray, ray_t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use lumen_math::Vec3;

    #[test]
    fn test_dispatch_per_variant() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let ray_t = Interval::new(1e-4, f32::INFINITY);
        let material = Material::lambertian(Vec3::splat(0.5));

        let sphere = Object::Sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, material.clone()));
        assert!((sphere.hit(&ray, ray_t).unwrap().t - 4.0).abs() < 1e-4);

        let triangle = Object::Triangle(Triangle::new(
            Vec3::new(-1.0, -1.0, -3.0),
            Vec3::new(1.0, -1.0, -3.0),
            Vec3::new(0.0, 1.0, -3.0),
            material.clone(),
        ));
        assert!((triangle.hit(&ray, ray_t).unwrap().t - 3.0).abs() < 1e-4);

        let plane = Object::Plane(InfinitePlane::new(
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::Z,
            material,
        ));
        assert!((plane.hit(&ray, ray_t).unwrap().t - 2.0).abs() < 1e-4);
    }
}
