use std::ops::{Neg, Range};

pub type Vec3 = cgmath::Vector3<f32>;
pub type Vec2 = cgmath::Vector2<f32>;
pub type Matrix3 = cgmath::Matrix3<f32>;

pub use cgmath::{ElementWise, InnerSpace, One, SquareMatrix, Zero};

///A Vec3 that's always normalized
#[derive(Debug, Clone, Copy)]
pub struct UnitVec3 {
    value: Vec3,
}

impl UnitVec3 {
    pub fn new(value: &Vec3) -> UnitVec3 {
        UnitVec3 {
            value: value.normalize(),
        }
    }

    pub fn value(&self) -> &Vec3 {
        &self.value
    }
}

impl Neg for UnitVec3 {
    type Output = UnitVec3;
    fn neg(self) -> UnitVec3 {
        UnitVec3 { value: -self.value }
    }
}

pub trait HasUnit<T> {
    fn unit(&self) -> T;
}

///Converts a Vec3 into its unit-length counterpart. The converted value's
///type guarantees a magnitude of 1
impl HasUnit<UnitVec3> for Vec3 {
    fn unit(&self) -> UnitVec3 {
        UnitVec3::new(self)
    }
}

///Element-wise min/max, which cgmath doesn't provide on vectors
pub trait ElemWiseExtrema {
    fn min_elem_wise(&self, other: &Self) -> Self;
    fn max_elem_wise(&self, other: &Self) -> Self;
}

impl ElemWiseExtrema for Vec3 {
    fn min_elem_wise(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    fn max_elem_wise(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

///A ray with a guaranteed-unit direction. The inverse direction is
///precomputed once so bounding-box slab tests don't divide per node.
#[derive(Debug, Clone)]
pub struct RayUnit {
    pub position: Vec3,
    pub direction: UnitVec3,
    pub direction_inverse: Vec3,
    pub t_range: Range<f32>,
}

impl RayUnit {
    pub fn new(position: Vec3, direction: UnitVec3) -> RayUnit {
        let direction_inverse = Vec3::new(1.0, 1.0, 1.0).div_element_wise(*direction.value());
        RayUnit {
            position,
            direction,
            direction_inverse,
            t_range: 0.0..f32::INFINITY,
        }
    }
}

#[test]
fn test_unit_vec_normalizes() {
    let v = Vec3::new(0.0, 3.0, 4.0).unit();
    assert_near!(v.value().magnitude(), 1.0, 1e-6);
    assert_near!(v.value().y, 0.6, 1e-6);
}

#[test]
fn test_unit_vec_negation() {
    let v = Vec3::new(0.0, 3.0, 4.0).unit();
    let flipped = -v;
    assert_near!(flipped.value().magnitude(), 1.0, 1e-6);
    assert_near!(flipped.value().y, -0.6, 1e-6);
}

#[test]
fn test_ray_inverse_direction() {
    let ray = RayUnit::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0).unit());
    assert_near!(ray.direction_inverse.z, 1.0, 1e-6);
    assert!(ray.direction_inverse.x.is_infinite());
}
