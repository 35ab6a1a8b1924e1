//! Lumen renderer - CPU path tracing.
//!
//! A Monte Carlo path tracer over a flat scene of named objects:
//! recursive intersection and shading, a KD tree for mesh geometry,
//! and a scanline-parallel driver filling a linear framebuffer.

mod framebuffer;
mod hit;
mod kdtree;
mod light;
mod material;
mod mesh;
mod object;
mod plane;
mod sampling;
mod scanline;
mod scene;
mod sphere;
mod tracer;
mod triangle;

pub use framebuffer::{color_to_rgba, linear_to_gamma, Framebuffer};
pub use hit::HitRecord;
pub use kdtree::KdTree;
pub use light::PointLight;
pub use material::{Color, Material, PhongParams};
pub use mesh::TriangleMesh;
pub use object::Object;
pub use plane::InfinitePlane;
pub use scanline::render;
pub use scene::{BuildError, ObjectList, Scene};
pub use sphere::Sphere;
pub use tracer::{shoot_ray, sky_color, T_EPSILON};
pub use triangle::Triangle;

/// Re-export common math types
pub use lumen_math::{Aabb, Interval, Ray, Vec3};
