//! Default value functions for serde deserialization.

pub fn dilation_size() -> u32 {
    5
}

pub fn safety_padding() -> u32 {
    3
}

pub fn diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}
