use std::fmt;

use crate::utilities::color::Color3;
use crate::utilities::math::*;
use crate::utilities::sampler::Sampler;

///Capability interface for surface response, consumed through
///`IntersectionRecord::material`. Directions follow the integrator's
///convention: `wo` points from the camera toward the surface, `wi` away
///from the surface, `n` is the unit surface normal.
pub trait Material {
    ///BRDF value for the given direction pair
    fn eval(&self, wo: &Vec3, wi: &Vec3, n: &Vec3) -> Color3;

    ///Importance-sample an outgoing direction for the given view direction
    fn sample(&self, wo: &Vec3, n: &Vec3, sampler: &mut dyn Sampler) -> Vec3;

    ///Probability density of having sampled `wi` via `sample`
    fn pdf(&self, wo: &Vec3, wi: &Vec3, n: &Vec3) -> f32;

    fn emission(&self) -> Color3;

    fn has_emission(&self) -> bool {
        self.emission().magnitude() > f32::EPSILON
    }
}

impl fmt::Debug for dyn Material {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Material")
    }
}
