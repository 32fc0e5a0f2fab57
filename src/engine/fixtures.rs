//!Deterministic geometry and materials for tests. Real scenes provide
//!their own `Primitive`/`Material` implementations; these exist so the
//!core can be exercised without them.

use std::f32::consts::PI;
use std::rc::Rc;

use crate::engine::bvh::AABoundingBox;
use crate::engine::material::Material;
use crate::engine::primitive::{IntersectionRecord, Primitive};
use crate::engine::probability::{
    transform_into, UniformHemisphereWarper, UniformSphereWarper, Warper,
};
use crate::utilities::color::Color3;
use crate::utilities::math::*;
use crate::utilities::sampler::Sampler;

pub struct DiffuseMaterial {
    pub albedo: Color3,
    pub emission: Color3,
}

impl Material for DiffuseMaterial {
    fn eval(&self, _wo: &Vec3, wi: &Vec3, n: &Vec3) -> Color3 {
        if wi.dot(*n) > 0.0 {
            self.albedo / PI
        } else {
            Color3::zero()
        }
    }

    fn sample(&self, _wo: &Vec3, n: &Vec3, sampler: &mut dyn Sampler) -> Vec3 {
        let local = UniformHemisphereWarper.sample(sampler);
        *transform_into(&n.unit(), &local).value()
    }

    fn pdf(&self, _wo: &Vec3, wi: &Vec3, n: &Vec3) -> f32 {
        if wi.dot(*n) > 0.0 {
            1.0 / (2.0 * PI)
        } else {
            0.0
        }
    }

    fn emission(&self) -> Color3 {
        self.emission
    }
}

pub fn diffuse(albedo: Color3) -> Rc<dyn Material> {
    Rc::new(DiffuseMaterial {
        albedo,
        emission: Color3::zero(),
    })
}

pub fn emissive(emission: Color3) -> Rc<dyn Material> {
    Rc::new(DiffuseMaterial {
        albedo: Color3::zero(),
        emission,
    })
}

pub struct TestSphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Rc<dyn Material>,
}

impl Primitive for TestSphere {
    fn bounds(&self) -> AABoundingBox {
        let r = Vec3::new(self.radius, self.radius, self.radius);
        AABoundingBox {
            lower: self.center - r,
            upper: self.center + r,
        }
    }

    fn surface_area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }

    fn has_emission(&self) -> bool {
        self.material.has_emission()
    }

    fn intersect(&self, ray: &RayUnit) -> IntersectionRecord {
        let oc = ray.position - self.center;
        let b = oc.dot(*ray.direction.value());
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return IntersectionRecord::no_intersection();
        }
        let sqrt_d = discriminant.sqrt();
        let mut t = -b - sqrt_d;
        if t <= ray.t_range.start || t >= ray.t_range.end {
            t = -b + sqrt_d;
        }
        if t <= ray.t_range.start || t >= ray.t_range.end {
            return IntersectionRecord::no_intersection();
        }
        let position = ray.position + *ray.direction.value() * t;
        IntersectionRecord {
            position,
            normal: (position - self.center) / self.radius,
            t,
            emit: self.material.emission(),
            material: Some(self.material.clone()),
        }
    }

    fn sample(&self, sampler: &mut dyn Sampler) -> (IntersectionRecord, f32) {
        let direction = UniformSphereWarper.sample(sampler);
        let record = IntersectionRecord {
            position: self.center + self.radius * direction,
            normal: direction,
            t: 0.0,
            emit: self.material.emission(),
            material: Some(self.material.clone()),
        };
        (record, 1.0 / self.surface_area())
    }
}

pub fn sphere(center: Vec3, radius: f32) -> Rc<dyn Primitive> {
    Rc::new(TestSphere {
        center,
        radius,
        material: diffuse(Color3::new(0.5, 0.5, 0.5)),
    })
}

pub fn row_of_spheres(xs: &[f32]) -> Vec<Rc<dyn Primitive>> {
    xs.iter()
        .map(|&x| sphere(Vec3::new(x, 0.0, 0.0), 0.1))
        .collect()
}

///One-sided rectangle spanned by two edge vectors. The reported normal is
///fixed regardless of which side the ray comes from.
pub struct TestQuad {
    pub origin: Vec3,
    pub edge_u: Vec3,
    pub edge_v: Vec3,
    pub normal: Vec3,
    pub material: Rc<dyn Material>,
}

impl Primitive for TestQuad {
    fn bounds(&self) -> AABoundingBox {
        let corners = [
            self.origin,
            self.origin + self.edge_u,
            self.origin + self.edge_v,
            self.origin + self.edge_u + self.edge_v,
        ];
        corners
            .iter()
            .fold(AABoundingBox::empty(), |acc, c| acc.union_point(c))
    }

    fn surface_area(&self) -> f32 {
        self.edge_u.cross(self.edge_v).magnitude()
    }

    fn has_emission(&self) -> bool {
        self.material.has_emission()
    }

    fn intersect(&self, ray: &RayUnit) -> IntersectionRecord {
        let denom = self.normal.dot(*ray.direction.value());
        if denom.abs() < 1e-8 {
            return IntersectionRecord::no_intersection();
        }
        let t = self.normal.dot(self.origin - ray.position) / denom;
        if t <= ray.t_range.start || t >= ray.t_range.end {
            return IntersectionRecord::no_intersection();
        }
        let position = ray.position + *ray.direction.value() * t;
        let local = position - self.origin;
        let u = local.dot(self.edge_u) / self.edge_u.magnitude2();
        let v = local.dot(self.edge_v) / self.edge_v.magnitude2();
        if u < 0.0 || u > 1.0 || v < 0.0 || v > 1.0 {
            return IntersectionRecord::no_intersection();
        }
        IntersectionRecord {
            position,
            normal: self.normal,
            t,
            emit: self.material.emission(),
            material: Some(self.material.clone()),
        }
    }

    fn sample(&self, sampler: &mut dyn Sampler) -> (IntersectionRecord, f32) {
        let (u, v) = sampler.get_2d_f32();
        let record = IntersectionRecord {
            position: self.origin + u * self.edge_u + v * self.edge_v,
            normal: self.normal,
            t: 0.0,
            emit: self.material.emission(),
            material: Some(self.material.clone()),
        };
        (record, 1.0 / self.surface_area())
    }
}

pub fn quad(
    origin: Vec3,
    edge_u: Vec3,
    edge_v: Vec3,
    material: Rc<dyn Material>,
) -> Rc<dyn Primitive> {
    let normal = edge_u.cross(edge_v).normalize();
    Rc::new(TestQuad {
        origin,
        edge_u,
        edge_v,
        normal,
        material,
    })
}

#[test]
fn test_sphere_fixture_intersection() {
    let s = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
    let ray = RayUnit::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0).unit());
    let hit = s.intersect(&ray);
    assert!(hit.intersected());
    assert_near!(hit.t, 4.0, 1e-5);
    assert_vec_near!(hit.normal, Vec3::new(0.0, 0.0, -1.0), 1e-5);
}

#[test]
fn test_quad_fixture_intersection_and_area() {
    let q = quad(
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
        diffuse(Color3::new(0.5, 0.5, 0.5)),
    );
    assert_near!(q.surface_area(), 4.0, 1e-5);

    let ray = RayUnit::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, -1.0, 0.0).unit());
    let hit = q.intersect(&ray);
    assert!(hit.intersected());
    assert_near!(hit.t, 3.0, 1e-5);

    let miss = RayUnit::new(Vec3::new(5.0, 3.0, 0.0), Vec3::new(0.0, -1.0, 0.0).unit());
    assert!(!q.intersect(&miss).intersected());
}
