use crate::{Ray, Vec3};

/// Axis-aligned bounding box stored as min/max corners.
///
/// Used purely as a pruning oracle by the spatial index: `intersects`
/// answers "could this ray touch the box", it never produces a hit point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The empty box: +inf/-inf sentinel corners, grows to fit the first
    /// point folded in.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Create an AABB from two opposite corner points (any order).
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Expand the box to contain `point`.
    pub fn grow(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            min: box0.min.min(box1.min),
            max: box0.max.max(box1.max),
        }
    }

    /// Returns true if `point` lies inside or on the box.
    pub fn contains(&self, point: Vec3) -> bool {
        self.min.cmple(point).all() && self.max.cmpge(point).all()
    }

    /// Slab-method ray test.
    ///
    /// Entry/exit distances come from the reciprocal direction per axis;
    /// an exactly-zero component yields infinities that resolve the slab
    /// correctly. The box is hit when the exit is in front of the origin
    /// and the entry does not come after it.
    pub fn intersects(&self, ray: &Ray) -> bool {
        let inv = ray.direction.recip();
        let t0 = (self.min - ray.origin) * inv;
        let t1 = (self.max - ray.origin) * inv;

        let t_min = t0.min(t1).max_element();
        let t_max = t0.max(t1).min_element();

        t_max >= 0.0 && t_min <= t_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        let empty = Aabb::EMPTY;
        assert_eq!(empty.min, Vec3::INFINITY);
        assert_eq!(empty.max, Vec3::NEG_INFINITY);
        assert!(!empty.contains(Vec3::ZERO));
    }

    #[test]
    fn test_grow_from_empty() {
        let mut aabb = Aabb::EMPTY;
        aabb.grow(Vec3::new(1.0, -2.0, 3.0));
        aabb.grow(Vec3::new(-1.0, 4.0, 0.0));

        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 3.0));
        assert!(aabb.contains(Vec3::new(0.0, 0.0, 1.0)));
        assert!(!aabb.contains(Vec3::new(2.0, 0.0, 1.0)));
    }

    #[test]
    fn test_surrounding() {
        let box0 = Aabb::from_points(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0));
        let box1 = Aabb::from_points(Vec3::new(3.0, 3.0, 3.0), Vec3::new(10.0, 10.0, 10.0));
        let surrounding = Aabb::surrounding(&box0, &box1);

        assert_eq!(surrounding.min, Vec3::ZERO);
        assert_eq!(surrounding.max, Vec3::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn test_intersects() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Ray pointing at the box
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(aabb.intersects(&ray));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
        assert!(!aabb.intersects(&ray));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z);
        assert!(!aabb.intersects(&ray));
    }

    #[test]
    fn test_intersects_axis_parallel_ray() {
        // Zero direction components exercise the reciprocal-infinity path.
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 4.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(aabb.intersects(&ray));

        // Same direction, origin outside the x slab
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::Z);
        assert!(!aabb.intersects(&ray));
    }

    #[test]
    fn test_intersects_from_inside() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.3, 0.5, -0.8));
        assert!(aabb.intersects(&ray));
    }
}
