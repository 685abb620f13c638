pub mod assignment;
pub mod constraint;
pub mod constraints;
pub mod engine;
pub mod problem;
pub mod stats;
pub mod value;
