pub mod all_different;
pub mod equal;
pub mod fixed_value;
pub mod not_equal;
