//!Core utilities

#[cfg(test)]
#[macro_use]
pub mod test_helpers;

pub mod sampler;
pub mod math;
pub mod color;
