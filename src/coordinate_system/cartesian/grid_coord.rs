use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a single voxel cell.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    pub gx: i32,
    pub gy: i32,
    pub gz: i32,
}

impl GridCoord {
    pub fn new(gx: i32, gy: i32, gz: i32) -> Self {
        Self { gx, gy, gz }
    }

    /// Number of single-axis unit steps separating two cells.
    pub fn manhattan_distance(&self, other: GridCoord) -> u64 {
        u64::from(self.gx.abs_diff(other.gx))
            + u64::from(self.gy.abs_diff(other.gy))
            + u64::from(self.gz.abs_diff(other.gz))
    }

    /// True if `other` differs from `self` by exactly one unit along exactly one axis.
    pub fn is_face_neighbor(&self, other: GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.gx, self.gy, self.gz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_neighbors() {
        let origin = GridCoord::new(0, 0, 0);
        assert!(origin.is_face_neighbor(GridCoord::new(1, 0, 0)));
        assert!(origin.is_face_neighbor(GridCoord::new(0, -1, 0)));
        assert!(origin.is_face_neighbor(GridCoord::new(0, 0, 1)));

        assert!(!origin.is_face_neighbor(origin));
        assert!(!origin.is_face_neighbor(GridCoord::new(1, 1, 0)));
        assert!(!origin.is_face_neighbor(GridCoord::new(0, 0, 2)));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(0, 0, 0);
        let b = GridCoord::new(2, 2, 10);
        assert_eq!(a.manhattan_distance(b), 14);
        assert_eq!(b.manhattan_distance(a), 14);
        assert_eq!(
            GridCoord::new(i32::MIN, 0, 0).manhattan_distance(GridCoord::new(i32::MAX, 0, 0)),
            u64::from(u32::MAX)
        );
    }
}
