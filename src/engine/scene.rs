use std::rc::Rc;

use crate::engine::bvh::{BVHAccelerator, SplitMethod};
use crate::engine::primitive::{IntersectionRecord, Primitive};
use crate::utilities::color::Color3;
use crate::utilities::math::*;
use crate::utilities::sampler::Sampler;

///Owns the primitive list and the spatial index over it. Built once before
///rendering; read-only afterwards.
#[derive(Debug)]
pub struct Scene {
    pub background_color: Color3,
    pub primitives: Vec<Rc<dyn Primitive>>,
    pub intersection_accel: Option<BVHAccelerator>,
}

impl Scene {
    pub fn new(background_color: Color3, primitives: Vec<Rc<dyn Primitive>>) -> Scene {
        let mut scene = Scene {
            background_color,
            primitives,
            intersection_accel: None,
        };
        scene.build_index();
        scene
    }

    ///Builds the spatial index over all primitives: SAH split strategy,
    ///one primitive per leaf
    pub fn build_index(&mut self) {
        self.intersection_accel = Some(BVHAccelerator::new(
            self.primitives.clone(),
            1,
            SplitMethod::SurfaceAreaHeuristic,
        ));
    }

    pub fn intersect(&self, ray: &RayUnit) -> IntersectionRecord {
        match &self.intersection_accel {
            Some(accel) => accel.intersect(ray),
            None => IntersectionRecord::no_intersection(),
        }
    }

    ///Picks a point on the emissive surfaces with probability proportional
    ///to area. This is a deliberate linear scan over the primitive list,
    ///independent of the BVH-based sampler, which draws over whatever set
    ///its tree was built on
    pub fn sample_emissive_light(
        &self,
        sampler: &mut dyn Sampler,
    ) -> (IntersectionRecord, f32) {
        let emissive_area: f32 = self
            .primitives
            .iter()
            .filter(|p| p.has_emission())
            .map(|p| p.surface_area())
            .sum();
        if emissive_area <= 0.0 {
            return (IntersectionRecord::no_intersection(), 0.0);
        }

        let p = sampler.get_f32() * emissive_area;
        let mut running_area = 0.0;
        let mut chosen: Option<&Rc<dyn Primitive>> = None;
        for primitive in self.primitives.iter().filter(|p| p.has_emission()) {
            running_area += primitive.surface_area();
            chosen = Some(primitive);
            if p <= running_area {
                break;
            }
        }
        match chosen {
            Some(primitive) => primitive.sample(sampler),
            None => (IntersectionRecord::no_intersection(), 0.0),
        }
    }
}
