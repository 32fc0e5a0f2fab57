pub mod bvh;

pub mod primitive;
pub mod material;
pub mod probability;

pub mod scene;
pub mod integrator;

#[cfg(test)]
pub mod fixtures;
