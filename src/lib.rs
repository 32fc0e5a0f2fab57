//!BVH-accelerated ray tracing core: an axis-aligned bounding-box hierarchy
//!with nearest-hit and area-proportional sampling queries, and a Monte Carlo
//!path-tracing integrator built on top of it. Concrete shapes, materials,
//!scene loading and image output live outside this crate behind the
//!`Primitive` and `Material` traits.

#[macro_use]
pub mod utilities;
pub mod engine;
