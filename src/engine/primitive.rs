use std::fmt;
use std::rc::Rc;

use crate::engine::bvh::AABoundingBox;
use crate::engine::material::Material;
use crate::utilities::color::Color3;
use crate::utilities::math::*;
use crate::utilities::sampler::Sampler;

///Capability interface for anything the BVH can index: a renderable scene
///object that knows its bounds, its surface area, whether it emits light,
///how a ray intersects it and how to pick a uniform point on its surface.
///Concrete shapes live outside this crate.
pub trait Primitive {
    fn bounds(&self) -> AABoundingBox;

    fn surface_area(&self) -> f32;

    fn has_emission(&self) -> bool;

    ///Nearest intersection of the ray with this primitive, or
    ///`IntersectionRecord::no_intersection()` on a miss
    fn intersect(&self, ray: &RayUnit) -> IntersectionRecord;

    ///Uniform area-weighted point on the surface together with the local
    ///pdf, typically 1 / surface_area
    fn sample(&self, sampler: &mut dyn Sampler) -> (IntersectionRecord, f32);
}

impl fmt::Debug for dyn Primitive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Primitive")
    }
}

///Result of a nearest-hit query or a surface-point sample. A miss is the
///sentinel record with `t = infinity`; `intersected()` is the authoritative
///"did a hit happen" check.
#[derive(Debug, Clone)]
pub struct IntersectionRecord {
    pub position: Vec3,
    pub normal: Vec3,
    pub t: f32,
    pub emit: Color3,
    pub material: Option<Rc<dyn Material>>,
}

impl IntersectionRecord {
    pub fn no_intersection() -> IntersectionRecord {
        IntersectionRecord {
            position: Vec3::zero(),
            normal: Vec3::zero(),
            t: f32::INFINITY,
            emit: Color3::zero(),
            material: None,
        }
    }

    pub fn intersected(&self) -> bool {
        self.t.is_finite()
    }
}
