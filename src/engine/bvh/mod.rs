mod aabb;
mod splitter;
mod accelerator;

pub use self::aabb::*;
pub use self::splitter::*;
pub use self::accelerator::*;
