//! Triangle primitive using the Möller-Trumbore intersection algorithm.

use lumen_math::{Interval, Ray, Vec3};

use crate::hit::HitRecord;
use crate::material::Material;

/// Determinant threshold below which a hit is culled. Rejects back-facing
/// and near-degenerate triangles in one test, which makes every triangle
/// single-sided.
const DET_CULL: f32 = 1e-4;

/// A single triangle with an owned material.
///
/// The stored normal may come from the face winding or from averaged
/// vertex normals (smooth-shaded meshes); intersection always reports it
/// as-is. The centroid midpoint is precomputed for the KD builder's sort.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub normal: Vec3,
    pub midpoint: Vec3,
    pub material: Material,
}

impl Triangle {
    /// Create a triangle with its normal taken from the vertex winding
    /// (counter-clockwise faces the normal).
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self::with_normal(v0, v1, v2, normal, material)
    }

    /// Create a triangle with an explicit (smooth-shading) normal.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: normal.normalize(),
            midpoint: (v0 + v1 + v2) / 3.0,
            material,
        }
    }

    /// Möller-Trumbore intersection in the non-normalized determinant
    /// form: barycentrics are compared against `[0, det]` so the single
    /// division happens only for candidate hits.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let pvec = ray.direction.cross(edge2);
        let det = pvec.dot(edge1);
        if det < DET_CULL {
            return None;
        }

        let tvec = ray.origin - self.v0;
        let u = tvec.dot(pvec);
        if u < 0.0 || u > det {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = ray.direction.dot(qvec);
        if v < 0.0 || u + v > det {
            return None;
        }

        let t = edge2.dot(qvec) / det;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord {
            t,
            point: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }
}
