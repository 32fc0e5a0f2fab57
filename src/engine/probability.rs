//!Sampling warpers for material and primitive implementers

use std::f32::consts::PI;

use crate::utilities::math::*;
use crate::utilities::sampler::Sampler;

pub trait Warper {
    type Output;

    fn sample<Spl: Sampler + ?Sized>(&self, sampler: &mut Spl) -> Self::Output {
        let (x, y) = sampler.get_2d_f32();
        let input = Vec2 { x, y };
        self.warp(&input)
    }

    ///Warps a 2d uniform random sample into the output
    fn warp(&self, from: &Vec2) -> Self::Output;

    ///Gives the probability density for sampling the given output.
    ///The output must have come from `warp`
    fn pdf(&self, output: &Self::Output) -> f32;
}

///Warper for a unit hemisphere around [0,1,0]
pub struct UniformHemisphereWarper;
impl Warper for UniformHemisphereWarper {
    type Output = Vec3;

    fn warp(&self, from: &Vec2) -> Self::Output {
        let height = from.x;
        let theta = 2.0 * PI * from.y;
        let r = (1.0 - height.powi(2)).sqrt();
        Vec3 {
            x: r * theta.cos(),
            y: height,
            z: -r * theta.sin(),
        }
    }

    fn pdf(&self, _: &Self::Output) -> f32 {
        1.0 / (2.0 * PI)
    }
}

///Warper for a unit sphere
pub struct UniformSphereWarper;
impl Warper for UniformSphereWarper {
    type Output = Vec3;

    fn warp(&self, from: &Vec2) -> Self::Output {
        let height = from.x * 2.0 - 1.0;
        let theta = 2.0 * PI * from.y;
        let r = (1.0 - height.powi(2)).sqrt();
        Vec3 {
            x: r * theta.cos(),
            y: height,
            z: -r * theta.sin(),
        }
    }

    fn pdf(&self, _: &Self::Output) -> f32 {
        1.0 / (4.0 * PI)
    }
}

fn get_rotation_matrix_to(normal: &UnitVec3) -> Matrix3 {
    let axis_0 = {
        //axis that's perpendicular to normal
        let up = Vec3::new(0.0, 1.0, 0.0);
        let x_dir = Vec3::new(1.0, 0.0, 0.0);
        let dot = up.dot(*normal.value());
        if dot.abs() < 0.95 {
            up.cross(*normal.value()).normalize()
        } else {
            x_dir.cross(*normal.value()).normalize()
        }
    };
    let axis_1 = axis_0.cross(*normal.value());

    Matrix3::from_cols(axis_0, *normal.value(), axis_1)
}

///Rotates the sample from [0,1,0] to the normal
pub fn transform_into(normal: &UnitVec3, sample: &Vec3) -> UnitVec3 {
    let rot_matrix = get_rotation_matrix_to(normal);
    (rot_matrix * *sample).unit()
}

///Rotates the sample from the normal to [0,1,0]
pub fn transform_from(normal: &UnitVec3, sample: &Vec3) -> UnitVec3 {
    let rot_matrix = get_rotation_matrix_to(normal)
        .invert()
        .unwrap_or_else(Matrix3::one);
    (rot_matrix * *sample).unit()
}
