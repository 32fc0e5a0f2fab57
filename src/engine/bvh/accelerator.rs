use std::rc::Rc;
use std::time::Instant;

use super::aabb::{AABBIntersectionRay, AABoundingBox};
use super::splitter::{BVHSplitter, SplitMethod};
use crate::engine::primitive::{IntersectionRecord, Primitive};
use crate::utilities::math::*;
use crate::utilities::sampler::Sampler;

#[derive(Debug, Clone, PartialEq)]
pub enum BVHNodeKind {
    Leaf { primitive: usize },
    Internal { left: usize, right: usize },
}

///One node of the hierarchy. Bounds always contain everything beneath the
///node; area is the cumulative surface area of the subtree's primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct BVHNode {
    pub bounds: AABoundingBox,
    pub area: f32,
    pub kind: BVHNodeKind,
}

///Bounding volume hierarchy over a primitive set. Nodes live in an arena
///addressed by index; leaves point into the (build-sorted) primitive list.
///Built once, immutable afterwards.
#[derive(Debug)]
pub struct BVHAccelerator {
    nodes: Vec<BVHNode>,
    root: Option<usize>,
    primitives: Vec<Rc<dyn Primitive>>,
    max_prims_in_node: usize,
    split_method: SplitMethod,
}

impl BVHAccelerator {
    pub fn new(
        mut primitives: Vec<Rc<dyn Primitive>>,
        max_prims_in_node: usize,
        split_method: SplitMethod,
    ) -> BVHAccelerator {
        let start_time = Instant::now();

        let splitter = split_method.splitter();
        let mut nodes = Vec::with_capacity(2 * primitives.len());
        let root = if primitives.is_empty() {
            None
        } else {
            Some(BVHAccelerator::build_recursive(
                &mut nodes,
                splitter.as_ref(),
                &mut primitives,
                0,
            ))
        };

        println!("bvh build time: {}s", start_time.elapsed().as_secs_f64());

        BVHAccelerator {
            nodes,
            root,
            primitives,
            max_prims_in_node: max_prims_in_node.min(255),
            split_method,
        }
    }

    ///Builds the subtree for `prims` bottom-up and returns its root index.
    ///`start` is the offset of this slice within the full primitive list
    fn build_recursive(
        nodes: &mut Vec<BVHNode>,
        splitter: &dyn BVHSplitter,
        prims: &mut [Rc<dyn Primitive>],
        start: usize,
    ) -> usize {
        if prims.len() == 1 {
            nodes.push(BVHNode {
                bounds: prims[0].bounds(),
                area: prims[0].surface_area(),
                kind: BVHNodeKind::Leaf { primitive: start },
            });
            return nodes.len() - 1;
        }

        let split = if prims.len() == 2 {
            1
        } else {
            let centroid_bounds = prims.iter().fold(AABoundingBox::empty(), |acc, p| {
                acc.union_point(&p.bounds().centroid())
            });
            let axis = centroid_bounds.max_extent_axis();
            prims.sort_by(|a, b| {
                a.bounds().centroid()[axis].total_cmp(&b.bounds().centroid()[axis])
            });
            let index = splitter.get_splitting_index(prims, &centroid_bounds, axis);
            if index == 0 || index >= prims.len() {
                //degenerate split (all centroids on one side); fall back to
                //the median so no primitive is ever dropped
                prims.len() / 2
            } else {
                index
            }
        };

        let (left_prims, right_prims) = prims.split_at_mut(split);
        let left = BVHAccelerator::build_recursive(nodes, splitter, left_prims, start);
        let right = BVHAccelerator::build_recursive(nodes, splitter, right_prims, start + split);
        nodes.push(BVHNode {
            bounds: nodes[left].bounds.union(&nodes[right].bounds),
            area: nodes[left].area + nodes[right].area,
            kind: BVHNodeKind::Internal { left, right },
        });
        nodes.len() - 1
    }

    ///Nearest intersection of the ray with the indexed primitives
    pub fn intersect(&self, ray: &RayUnit) -> IntersectionRecord {
        match self.root {
            None => IntersectionRecord::no_intersection(),
            Some(root) => self.intersect_node(root, &AABBIntersectionRay::new(ray), ray),
        }
    }

    fn intersect_node(
        &self,
        index: usize,
        box_ray: &AABBIntersectionRay,
        ray: &RayUnit,
    ) -> IntersectionRecord {
        let node = &self.nodes[index];
        if !node.bounds.intersects_ray(box_ray) {
            return IntersectionRecord::no_intersection();
        }
        match node.kind {
            BVHNodeKind::Leaf { primitive } => self.primitives[primitive].intersect(ray),
            BVHNodeKind::Internal { left, right } => {
                let hit_left = self.intersect_node(left, box_ray, ray);
                let hit_right = self.intersect_node(right, box_ray, ray);
                //a miss carries a sentinel distance, so check that a hit
                //happened before comparing distances
                match (hit_left.intersected(), hit_right.intersected()) {
                    (true, true) => {
                        if hit_left.t <= hit_right.t {
                            hit_left
                        } else {
                            hit_right
                        }
                    }
                    (true, false) => hit_left,
                    (false, true) => hit_right,
                    (false, false) => IntersectionRecord::no_intersection(),
                }
            }
        }
    }

    ///Picks a point on the indexed surfaces with probability proportional
    ///to surface area. Returns the surface point and its pdf with respect
    ///to area over the whole set
    pub fn sample(&self, sampler: &mut dyn Sampler) -> (IntersectionRecord, f32) {
        let root = match self.root {
            Some(root) => root,
            None => return (IntersectionRecord::no_intersection(), 0.0),
        };
        let root_area = self.nodes[root].area;
        if root_area <= 0.0 {
            return (IntersectionRecord::no_intersection(), 0.0);
        }
        let p = sampler.get_f32() * root_area;
        let (position, pdf) = self.sample_node(root, p, sampler);
        (position, pdf / root_area)
    }

    fn sample_node(
        &self,
        index: usize,
        p: f32,
        sampler: &mut dyn Sampler,
    ) -> (IntersectionRecord, f32) {
        let node = &self.nodes[index];
        match node.kind {
            BVHNodeKind::Leaf { primitive } => {
                let (position, pdf) = self.primitives[primitive].sample(sampler);
                (position, pdf * node.area)
            }
            BVHNodeKind::Internal { left, right } => {
                let left_area = self.nodes[left].area;
                if p < left_area {
                    self.sample_node(left, p, sampler)
                } else {
                    self.sample_node(right, p - left_area, sampler)
                }
            }
        }
    }

    ///Cumulative surface area of all indexed primitives
    pub fn total_area(&self) -> f32 {
        self.root.map_or(0.0, |root| self.nodes[root].area)
    }

    pub fn primitives(&self) -> &[Rc<dyn Primitive>] {
        &self.primitives
    }

    pub fn split_method(&self) -> SplitMethod {
        self.split_method
    }

    pub fn max_prims_in_node(&self) -> usize {
        self.max_prims_in_node
    }
}
