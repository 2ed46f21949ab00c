use super::vector3::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A location in continuous space, in the same integer units as the grid cell sizes.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Parses `"x,y,z"` (spaces are also accepted as separators).
    pub fn from_str(s: &str) -> Result<Self, String> {
        let parts: Vec<i32> = s
            .split([',', ' '])
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid coordinate '{part}': {e}"))
            })
            .collect::<Result<_, _>>()?;

        let [x, y, z]: [i32; 3] = parts
            .try_into()
            .map_err(|parts: Vec<i32>| format!("Expected 3 coordinates, got {}", parts.len()))?;

        Ok(Self { x, y, z })
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

// below are associated +- operators
impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, other: Vector3) -> Point3 {
        Point3 {
            x: self.x + other.dx,
            y: self.y + other.dy,
            z: self.z + other.dz,
        }
    }
}

impl AddAssign<Vector3> for Point3 {
    fn add_assign(&mut self, other: Vector3) {
        self.x += other.dx;
        self.y += other.dy;
        self.z += other.dz;
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, other: Point3) -> Vector3 {
        Vector3 {
            dx: self.x - other.x,
            dy: self.y - other.y,
            dz: self.z - other.z,
        }
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, other: Vector3) -> Point3 {
        Point3 {
            x: self.x - other.dx,
            y: self.y - other.dy,
            z: self.z - other.dz,
        }
    }
}

impl SubAssign<Vector3> for Point3 {
    fn sub_assign(&mut self, other: Vector3) {
        self.x -= other.dx;
        self.y -= other.dy;
        self.z -= other.dz;
    }
}
