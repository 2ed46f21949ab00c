use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Difference between two [`Point3`](super::Point3)s.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector3 {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
}

impl Vector3 {
    pub fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0 && self.dz == 0
    }
}

// below are associated +- operators
impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
            dz: self.dz + other.dz,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        self.dx += other.dx;
        self.dy += other.dy;
        self.dz += other.dz;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            dx: self.dx - other.dx,
            dy: self.dy - other.dy,
            dz: self.dz - other.dz,
        }
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        self.dx -= other.dx;
        self.dy -= other.dy;
        self.dz -= other.dz;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3 {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
        }
    }
}
