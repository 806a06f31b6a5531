pub mod axis;
pub mod bounds;
