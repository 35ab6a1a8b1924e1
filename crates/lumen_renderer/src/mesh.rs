//! Triangle mesh queried by linear scan.

use lumen_math::{Interval, Ray};

use crate::hit::HitRecord;
use crate::triangle::Triangle;

/// A mesh that tests every owned triangle in turn.
///
/// The scan shrinks `max` to each accepted hit's `t`, so the record it
/// returns is the nearest within the whole mesh, not the first found.
/// For large meshes the KD tree is the better container; this one exists
/// for small triangle counts and as the brute-force reference.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut shrunk = ray_t;

        for triangle in &self.triangles {
            if let Some(record) = triangle.hit(ray, shrunk) {
                shrunk.max = record.t;
                closest = Some(record);
            }
        }

        closest
    }
}
