//!Split strategies for the BVH builder

use std::rc::Rc;

use serde_derive::Deserialize;

use super::aabb::AABoundingBox;
use crate::engine::primitive::Primitive;

///Strategy selector, chosen once at accelerator construction
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum SplitMethod {
    Midpoint,
    SurfaceAreaHeuristic,
}

impl SplitMethod {
    pub fn splitter(&self) -> Box<dyn BVHSplitter> {
        match *self {
            SplitMethod::Midpoint => Box::new(MedianIndexSplitter),
            SplitMethod::SurfaceAreaHeuristic => Box::new(SAHBucketSplitter {
                number_of_buckets: 12,
                traversal_cost: 0.125,
            }),
        }
    }
}

pub trait BVHSplitter {
    ///Computes an index where the given slice should be split. The slice is
    ///already sorted by centroid along `axis`, and `centroid_bounds` is the
    ///bounding box of the centroids. A return of 0 or `len` means the
    ///strategy found no usable split
    fn get_splitting_index(
        &self,
        sorted_objects: &[Rc<dyn Primitive>],
        centroid_bounds: &AABoundingBox,
        axis: usize,
    ) -> usize;
}

///Splits at the median: floor(n/2) objects on the left
pub struct MedianIndexSplitter;

impl BVHSplitter for MedianIndexSplitter {
    fn get_splitting_index(
        &self,
        sorted_objects: &[Rc<dyn Primitive>],
        _centroid_bounds: &AABoundingBox,
        _axis: usize,
    ) -> usize {
        if sorted_objects.len() <= 1 {
            return 0;
        }
        sorted_objects.len() / 2
    }
}

///Surface-area-heuristic splitter: bins centroids into equal-width buckets
///along the split axis and picks the bucket boundary minimizing
///`count_left * area_left + count_right * area_right + traversal_cost`
pub struct SAHBucketSplitter {
    pub number_of_buckets: usize,
    pub traversal_cost: f32,
}

impl SAHBucketSplitter {
    fn bucket_index(&self, normalized_offset: f32) -> usize {
        let b = (self.number_of_buckets as f32 * normalized_offset) as usize;
        b.min(self.number_of_buckets - 1)
    }
}

impl BVHSplitter for SAHBucketSplitter {
    fn get_splitting_index(
        &self,
        sorted_objects: &[Rc<dyn Primitive>],
        centroid_bounds: &AABoundingBox,
        axis: usize,
    ) -> usize {
        if sorted_objects.len() <= 1 {
            return 0;
        }

        let buckets = self.number_of_buckets;
        let mut counts = vec![0usize; buckets];
        let mut bounds = vec![AABoundingBox::empty(); buckets];
        for object in sorted_objects {
            let object_bounds = object.bounds();
            let offset = centroid_bounds.offset(&object_bounds.centroid())[axis];
            let b = self.bucket_index(offset);
            counts[b] += 1;
            bounds[b] = bounds[b].union(&object_bounds);
        }

        //evaluate the cost of splitting after each bucket boundary
        let mut best_cost = f32::INFINITY;
        let mut best_boundary = 0;
        for boundary in 0..buckets - 1 {
            let mut count_left = 0;
            let mut count_right = 0;
            let mut bounds_left = AABoundingBox::empty();
            let mut bounds_right = AABoundingBox::empty();
            for b in 0..=boundary {
                count_left += counts[b];
                bounds_left = bounds_left.union(&bounds[b]);
            }
            for b in boundary + 1..buckets {
                count_right += counts[b];
                bounds_right = bounds_right.union(&bounds[b]);
            }
            let cost = count_left as f32 * bounds_left.surface_area()
                + count_right as f32 * bounds_right.surface_area()
                + self.traversal_cost;
            if cost < best_cost {
                best_cost = cost;
                best_boundary = boundary;
            }
        }

        //recover the array index matching the winning bucket boundary
        counts[0..=best_boundary].iter().sum()
    }
}
