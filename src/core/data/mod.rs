pub mod colour;
pub mod colour_field;
pub mod complex;
pub mod grid;
pub mod region;
pub mod resolution;
