//! Runtime scene: the collision directory plus lights, and the builder
//! that materializes one from a scene description.

use std::collections::HashMap;
use std::path::Path;

use lumen_core::error::LoadError;
use lumen_core::scene_file::{AccelDesc, LightDesc, MaterialDesc, ObjectDesc, SceneFile};
use lumen_core::Mesh;
use lumen_math::{Interval, Ray};
use thiserror::Error;

use crate::hit::HitRecord;
use crate::kdtree::KdTree;
use crate::light::PointLight;
use crate::material::Material;
use crate::mesh::TriangleMesh;
use crate::object::Object;
use crate::plane::InfinitePlane;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Errors raised while turning a scene description into renderable
/// geometry. These surface before rendering starts; nothing in the
/// render phase can fail.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to load mesh {path}: {source}")]
    Mesh {
        path: String,
        #[source]
        source: LoadError,
    },
}

/// Flat directory of named top-level objects, queried linearly.
///
/// The map is for naming only; the hit query shrinks `max` across the
/// whole directory, so iteration order never changes the result.
#[derive(Debug, Clone, Default)]
pub struct ObjectList {
    objects: HashMap<String, Object>,
}

impl ObjectList {
    pub fn add(&mut self, name: impl Into<String>, object: Object) {
        self.objects.insert(name.into(), object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest hit across every object, strictly inside the interval.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut shrunk = ray_t;

        for object in self.objects.values() {
            if let Some(record) = object.hit(ray, shrunk) {
                shrunk.max = record.t;
                closest = Some(record);
            }
        }

        closest
    }
}

/// Everything the tracer sees: named objects and named lights.
///
/// Duplicate names keep the last value written. Immutable once rendering
/// starts; shared by reference across all row tasks.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: ObjectList,
    lights: HashMap<String, PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a scene from its file description. Mesh paths resolve
    /// relative to `base_dir`.
    pub fn from_file(file: &SceneFile, base_dir: &Path) -> Result<Self, BuildError> {
        let mut scene = Scene::new();

        for (name, desc) in &file.objects {
            scene.add_object(name.clone(), build_object(desc, base_dir)?);
        }
        for (name, desc) in &file.lights {
            scene.add_light(name.clone(), build_light(desc));
        }

        log::info!(
            "Built scene: {} objects, {} lights",
            scene.object_count(),
            scene.light_count()
        );
        Ok(scene)
    }

    pub fn add_object(&mut self, name: impl Into<String>, object: Object) {
        self.objects.add(name, object);
    }

    pub fn add_light(&mut self, name: impl Into<String>, light: PointLight) {
        self.lights.insert(name.into(), light);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn lights(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.values()
    }

    /// Nearest hit over the collision directory.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        self.objects.hit(ray, ray_t)
    }
}

fn build_material(desc: &MaterialDesc) -> Material {
    match desc {
        MaterialDesc::Lambertian { albedo } => Material::lambertian(*albedo),
        MaterialDesc::Metal {
            albedo,
            reflectivity,
            shininess,
            fuzz,
        } => Material::metal(*albedo, *reflectivity, *shininess, *fuzz),
        MaterialDesc::Dielectric {
            index,
            reflectivity,
            shininess,
        } => Material::dielectric(*index, *reflectivity, *shininess),
        MaterialDesc::Phong {
            albedo,
            reflectivity,
            shininess,
        } => Material::phong(*albedo, *reflectivity, *shininess),
        MaterialDesc::Emissive { emission } => Material::emissive(*emission),
    }
}

fn build_light(desc: &LightDesc) -> PointLight {
    PointLight::new(desc.position, desc.color, desc.power)
}

fn build_object(desc: &ObjectDesc, base_dir: &Path) -> Result<Object, BuildError> {
    Ok(match desc {
        ObjectDesc::Sphere {
            origin,
            radius,
            material,
        } => Object::Sphere(Sphere::new(*origin, *radius, build_material(material))),

        ObjectDesc::Triangle { vertices, material } => Object::Triangle(Triangle::new(
            vertices[0],
            vertices[1],
            vertices[2],
            build_material(material),
        )),

        ObjectDesc::Plane {
            position,
            normal,
            material,
        } => Object::Plane(InfinitePlane::new(
            *position,
            *normal,
            build_material(material),
        )),

        ObjectDesc::Mesh {
            path,
            scale,
            translation,
            accel,
            material,
        } => {
            let mut mesh = Mesh::load_obj(base_dir.join(path)).map_err(|source| {
                BuildError::Mesh {
                    path: path.clone(),
                    source,
                }
            })?;
            mesh.scale(*scale);
            mesh.translate(*translation);
            mesh.ensure_normals();

            let triangles = mesh_triangles(&mesh, &build_material(material));
            match accel {
                AccelDesc::Kd => Object::KdTree(KdTree::build(triangles)),
                AccelDesc::List => Object::Mesh(TriangleMesh::new(triangles)),
            }
        }
    })
}

/// Flatten indexed mesh data into render triangles, folding the averaged
/// vertex normals into each triangle's stored normal.
fn mesh_triangles(mesh: &Mesh, material: &Material) -> Vec<Triangle> {
    let normals = mesh
        .normals
        .as_ref()
        .expect("ensure_normals ran before triangulation");

    mesh.indices
        .chunks_exact(3)
        .map(|face| {
            let (i0, i1, i2) = (face[0] as usize, face[1] as usize, face[2] as usize);
            Triangle::with_normal(
                mesh.positions[i0],
                mesh.positions[i1],
                mesh.positions[i2],
                normals[i0] + normals[i1] + normals[i2],
                material.clone(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    fn sphere_at(z: f32, radius: f32) -> Object {
        Object::Sphere(Sphere::new(
            Vec3::new(0.0, 0.0, z),
            radius,
            Material::lambertian(Vec3::splat(0.5)),
        ))
    }

    #[test]
    fn test_nearest_of_several_objects() {
        let mut scene = Scene::new();
        scene.add_object("far", sphere_at(-10.0, 1.0));
        scene.add_object("near", sphere_at(-5.0, 1.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene
            .hit(&ray, Interval::new(1e-4, f32::INFINITY))
            .unwrap();
        assert!((hit.t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let mut scene = Scene::new();
        scene.add_object("ball", sphere_at(-10.0, 1.0));
        scene.add_object("ball", sphere_at(-5.0, 1.0));

        assert_eq!(scene.object_count(), 1);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene
            .hit(&ray, Interval::new(1e-4, f32::INFINITY))
            .unwrap();
        assert!((hit.t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(scene.hit(&ray, Interval::new(1e-4, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_from_file_builds_primitives_and_lights() {
        let text = r#"{
            "objects": {
                "ball": {
                    "type": "sphere",
                    "origin": [0.0, 0.0, -5.0],
                    "radius": 1.0,
                    "material": { "type": "lambertian", "albedo": [0.5, 0.5, 0.5] }
                },
                "ground": {
                    "type": "plane",
                    "position": [0.0, -2.0, 0.0],
                    "normal": [0.0, 1.0, 0.0],
                    "material": { "type": "phong", "albedo": [0.8, 0.8, 0.8],
                                  "reflectivity": 0.1, "shininess": 4.0 }
                }
            },
            "lights": {
                "key": { "position": [0.0, 10.0, 0.0], "color": [1.0, 1.0, 1.0], "power": 0.9 }
            }
        }"#;
        let file: SceneFile = serde_json::from_str(text).unwrap();
        let scene = Scene::from_file(&file, Path::new(".")).unwrap();

        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.light_count(), 1);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene
            .hit(&ray, Interval::new(1e-4, f32::INFINITY))
            .unwrap();
        assert!((hit.t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_from_file_missing_mesh_fails_fast() {
        let text = r#"{
            "objects": {
                "statue": {
                    "type": "mesh",
                    "path": "does_not_exist.obj",
                    "material": { "type": "lambertian", "albedo": [1.0, 1.0, 1.0] }
                }
            }
        }"#;
        let file: SceneFile = serde_json::from_str(text).unwrap();
        let result = Scene::from_file(&file, Path::new("."));
        assert!(matches!(result, Err(BuildError::Mesh { .. })));
    }

    #[test]
    fn test_mesh_triangles_average_vertex_normals() {
        let mut mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
            None,
        );
        mesh.ensure_normals();

        let triangles = mesh_triangles(&mesh, &Material::lambertian(Vec3::ONE));
        assert_eq!(triangles.len(), 1);
        // Flat triangle in the XY plane: every vertex normal is +Z, and so
        // is their average.
        assert!((triangles[0].normal - Vec3::Z).length() < 1e-5);
    }
}
