use super::math::Vec3;

///Linear RGB radiance values. Channel math is plain vector math.
pub type Color3 = Vec3;
