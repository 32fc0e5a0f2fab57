use serde_derive::Deserialize;

use crate::engine::scene::Scene;
use crate::utilities::color::Color3;
use crate::utilities::math::*;
use crate::utilities::sampler::Sampler;

//offset for shadow/bounce ray origins and the cutoff for near-zero pdfs
const EPSILON: f32 = 1e-5;
//a shadow ray reaches the sampled light point when its hit distance is
//within this tolerance of the expected distance
const SHADOW_DISTANCE_TOLERANCE: f32 = 0.01;

const DEFAULT_RUSSIAN_ROULETTE: f32 = 0.8;
const DEFAULT_MAX_DEPTH: u32 = 64;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
pub enum IntegratorSpec {
    PathTracer {
        russian_roulette: f32,
        max_depth: Option<u32>,
    },
}

impl IntegratorSpec {
    pub fn into_integrator(&self) -> PathTracerIntegrator {
        match *self {
            IntegratorSpec::PathTracer {
                russian_roulette,
                max_depth,
            } => PathTracerIntegrator {
                russian_roulette,
                max_depth: max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            },
        }
    }
}

///Unidirectional path tracer with next-event estimation: one explicit
///light sample per bounce plus a Russian-roulette-terminated indirect
///bounce. `max_depth` is a hard recursion ceiling behind the roulette so
///adversarial scenes cannot exhaust the stack.
#[derive(Debug, Clone)]
pub struct PathTracerIntegrator {
    pub russian_roulette: f32,
    pub max_depth: u32,
}

impl Default for PathTracerIntegrator {
    fn default() -> PathTracerIntegrator {
        PathTracerIntegrator {
            russian_roulette: DEFAULT_RUSSIAN_ROULETTE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PathTracerIntegrator {
    ///Radiance arriving along the ray
    pub fn trace(
        &self,
        ray: &RayUnit,
        scene: &Scene,
        depth: u32,
        sampler: &mut dyn Sampler,
    ) -> Color3 {
        if depth >= self.max_depth {
            return Color3::zero();
        }

        let record = scene.intersect(ray);
        if !record.intersected() {
            return scene.background_color;
        }
        let material = match record.material.clone() {
            Some(material) => material,
            None => return Color3::zero(),
        };

        let p = record.position;
        let wo = *ray.direction.value();
        let n = record.normal;

        //nudge secondary-ray origins off the surface toward the viewer
        //side to avoid self-intersection
        let p_offset = if wo.dot(n) < 0.0 {
            p + n * EPSILON
        } else {
            p - n * EPSILON
        };

        //direct term: one explicit sample on the emissive geometry
        let mut direct = Color3::zero();
        let (light, pdf_light) = scene.sample_emissive_light(sampler);
        if light.intersected() && pdf_light > EPSILON {
            let to_light = light.position - p;
            let distance = to_light.magnitude();
            let ws = to_light / distance;
            let shadow_ray = RayUnit::new(p_offset, ws.unit());
            let obstruction = scene.intersect(&shadow_ray);
            if (obstruction.t - distance).abs() < SHADOW_DISTANCE_TOLERANCE {
                let cos_surface = ws.dot(n).max(0.0);
                let cos_light = (-ws).dot(light.normal).max(0.0);
                direct = light.emit.mul_element_wise(material.eval(&wo, &ws, &n))
                    * cos_surface
                    * cos_light
                    / (distance * distance * pdf_light);
            }
        }

        //indirect term, kept alive by Russian roulette. Bounces that land
        //on emissive surfaces contribute nothing here: their radiance is
        //already accounted for by the direct term
        let mut indirect = Color3::zero();
        if sampler.get_f32() < self.russian_roulette {
            let wi = material.sample(&wo, &n, sampler).normalize();
            let bounce_ray = RayUnit::new(p_offset, wi.unit());
            let bounce = scene.intersect(&bounce_ray);
            let bounce_is_emissive = bounce
                .material
                .as_ref()
                .map_or(true, |m| m.has_emission());
            if bounce.intersected() && !bounce_is_emissive {
                let pdf = material.pdf(&wo, &wi, &n);
                if pdf > EPSILON {
                    let incoming = self.trace(&bounce_ray, scene, depth + 1, sampler);
                    indirect = incoming.mul_element_wise(material.eval(&wo, &wi, &n))
                        * wi.dot(n).max(0.0)
                        / (pdf * self.russian_roulette);
                }
            }
        }

        material.emission() + direct + indirect
    }
}
