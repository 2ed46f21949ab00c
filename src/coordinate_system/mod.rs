pub mod cartesian;
pub mod grid;
