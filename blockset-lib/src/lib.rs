pub mod collections;
pub mod math;
