mod grid_coord;
mod point3;
mod vector3;

pub use grid_coord::GridCoord;
pub use point3::Point3;
pub use vector3::Vector3;
