//! KD tree over triangles.
//!
//! Recursive median split: the axis cycles X→Y→Z with tree depth, the
//! batch is sorted by triangle midpoint on that axis and cut in half.
//! Splitting by count keeps the tree balanced in array space even when
//! the geometry clusters, at the cost of overlapping child volumes.

use lumen_math::{Aabb, Interval, Ray};

use crate::hit::HitRecord;
use crate::triangle::Triangle;

/// Maximum triangles per leaf before splitting.
const LEAF_MAX_SIZE: usize = 8;

/// Tree node. Children are exclusively owned by their parent, so the
/// whole structure drops with the root.
#[derive(Debug, Clone)]
enum KdNode {
    Branch {
        left: Box<KdNode>,
        right: Box<KdNode>,
        bounds: Aabb,
    },
    Leaf {
        triangles: Vec<Triangle>,
        bounds: Aabb,
    },
    Empty,
}

/// AABB of a triangle batch: fold all three vertices of every triangle.
/// An empty batch yields the +inf/-inf sentinel box.
fn bounds_of(triangles: &[Triangle]) -> Aabb {
    let mut bounds = Aabb::EMPTY;
    for triangle in triangles {
        bounds.grow(triangle.v0);
        bounds.grow(triangle.v1);
        bounds.grow(triangle.v2);
    }
    bounds
}

impl KdNode {
    fn build(mut triangles: Vec<Triangle>, depth: usize) -> Self {
        if triangles.is_empty() {
            return KdNode::Empty;
        }

        let bounds = bounds_of(&triangles);
        if triangles.len() <= LEAF_MAX_SIZE {
            return KdNode::Leaf { triangles, bounds };
        }

        let axis = depth % 3;
        triangles.sort_unstable_by(|a, b| {
            a.midpoint[axis]
                .partial_cmp(&b.midpoint[axis])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let right = triangles.split_off(triangles.len() / 2);
        KdNode::Branch {
            left: Box::new(KdNode::build(triangles, depth + 1)),
            right: Box::new(KdNode::build(right, depth + 1)),
            bounds,
        }
    }

    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            KdNode::Empty => None,

            KdNode::Leaf { triangles, bounds } => {
                if !bounds.intersects(ray) {
                    return None;
                }

                let mut closest: Option<HitRecord<'_>> = None;
                let mut shrunk = ray_t;
                for triangle in triangles {
                    if let Some(record) = triangle.hit(ray, shrunk) {
                        shrunk.max = record.t;
                        closest = Some(record);
                    }
                }
                closest
            }

            KdNode::Branch {
                left,
                right,
                bounds,
            } => {
                if !bounds.intersects(ray) {
                    return None;
                }

                // Child volumes can overlap, so both sides are queried
                // with the same interval and the lesser t wins.
                match (left.hit(ray, ray_t), right.hit(ray, ray_t)) {
                    (Some(a), Some(b)) => Some(if a.t <= b.t { a } else { b }),
                    (a, b) => a.or(b),
                }
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            KdNode::Empty | KdNode::Leaf { .. } => 1,
            KdNode::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Spatial index over a triangle collection.
#[derive(Debug, Clone)]
pub struct KdTree {
    root: KdNode,
    triangle_count: usize,
}

impl KdTree {
    /// Build the tree, consuming the triangle batch.
    pub fn build(triangles: Vec<Triangle>) -> Self {
        let triangle_count = triangles.len();
        let root = KdNode::build(triangles, 0);
        log::info!(
            "Built KD tree: {} triangles, depth {}",
            triangle_count,
            root.depth()
        );
        Self {
            root,
            triangle_count,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Nearest triangle hit within the interval, equivalent to a linear
    /// scan over the whole batch.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        self.root.hit(ray, ray_t)
    }
}
