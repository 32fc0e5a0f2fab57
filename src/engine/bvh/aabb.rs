use crate::utilities::math::*;

///Axis-aligned bounding box. An empty box has inverted infinite corners so
///that union with anything yields the other operand.
#[derive(Debug, Clone, PartialEq)]
pub struct AABoundingBox {
    pub lower: Vec3,
    pub upper: Vec3,
}

impl AABoundingBox {
    pub fn empty() -> AABoundingBox {
        AABoundingBox {
            lower: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            upper: Vec3::new(-f32::INFINITY, -f32::INFINITY, -f32::INFINITY),
        }
    }

    pub fn union(&self, other: &AABoundingBox) -> AABoundingBox {
        AABoundingBox {
            lower: self.lower.min_elem_wise(&other.lower),
            upper: self.upper.max_elem_wise(&other.upper),
        }
    }

    pub fn union_point(&self, point: &Vec3) -> AABoundingBox {
        AABoundingBox {
            lower: self.lower.min_elem_wise(point),
            upper: self.upper.max_elem_wise(point),
        }
    }

    pub fn centroid(&self) -> Vec3 {
        (self.lower + self.upper) / 2.0
    }

    pub fn diagonal(&self) -> Vec3 {
        self.upper - self.lower
    }

    pub fn surface_area(&self) -> f32 {
        let d = self.diagonal();
        if d.x < 0.0 || d.y < 0.0 || d.z < 0.0 {
            //empty or inverted box
            return 0.0;
        }
        2.0 * (d.x * d.y + d.y * d.z + d.z * d.x)
    }

    ///Axis of maximum extent. Ties resolve to the lowest axis index, so x
    ///wins over y wins over z
    pub fn max_extent_axis(&self) -> usize {
        let d = self.diagonal();
        if d.x >= d.y && d.x >= d.z {
            0
        } else if d.y >= d.z {
            1
        } else {
            2
        }
    }

    ///Normalized position of a point within the box, per axis in [0,1] for
    ///interior points. Degenerate axes map to 0
    pub fn offset(&self, point: &Vec3) -> Vec3 {
        let mut o = *point - self.lower;
        let d = self.diagonal();
        for axis in 0..3 {
            if d[axis] > 0.0 {
                o[axis] /= d[axis];
            } else {
                o[axis] = 0.0;
            }
        }
        o
    }

    ///Slab test against a prepared ray. The direction signs pick which face
    ///of each slab is the near one, so no per-axis min/max swap is needed
    pub fn intersects_ray(&self, ray: &AABBIntersectionRay) -> bool {
        let mut t_near_max = -f32::INFINITY;
        let mut t_far_min = f32::INFINITY;
        for axis in 0..3 {
            let (near_face, far_face) = if ray.dir_is_neg[axis] {
                (self.upper[axis], self.lower[axis])
            } else {
                (self.lower[axis], self.upper[axis])
            };
            let t_near = (near_face - ray.position[axis]) * ray.direction_inverse[axis];
            let t_far = (far_face - ray.position[axis]) * ray.direction_inverse[axis];
            t_near_max = t_near_max.max(t_near);
            t_far_min = t_far_min.min(t_far);
        }

        if !(ray.t_start <= t_far_min) || !(t_near_max <= ray.t_end) || !(t_near_max <= t_far_min)
        {
            return false;
        }

        true
    }
}

///Per-traversal precomputation for box slab tests: inverse direction plus
///the sign of each direction component
pub struct AABBIntersectionRay {
    pub position: Vec3,
    pub direction_inverse: Vec3,
    pub dir_is_neg: [bool; 3],
    pub t_start: f32,
    pub t_end: f32,
}

impl AABBIntersectionRay {
    pub fn new(ray: &RayUnit) -> AABBIntersectionRay {
        let direction = ray.direction.value();
        AABBIntersectionRay {
            position: ray.position,
            direction_inverse: ray.direction_inverse,
            dir_is_neg: [direction.x < 0.0, direction.y < 0.0, direction.z < 0.0],
            t_start: ray.t_range.start,
            t_end: ray.t_range.end,
        }
    }
}
