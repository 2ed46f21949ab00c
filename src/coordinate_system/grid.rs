use super::cartesian::{GridCoord, Point3};
use crate::error::TraceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal cell size used when none is given.
pub const DEFAULT_CELL_SIZE_XY: i32 = 50;
/// Vertical cell size used when none is given.
pub const DEFAULT_CELL_SIZE_Z: i32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// A uniform axis-aligned voxel grid.
///
/// `x` and `y` share the horizontal cell size, `z` uses the vertical one.
/// Both sizes are guaranteed positive, so conversions never divide by zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridSpec")]
pub struct GridSpec {
    cell_size_xy: i32,
    cell_size_z: i32,
}

#[derive(Deserialize)]
struct RawGridSpec {
    cell_size_xy: i32,
    cell_size_z: i32,
}

impl TryFrom<RawGridSpec> for GridSpec {
    type Error = TraceError;

    fn try_from(raw: RawGridSpec) -> Result<Self, Self::Error> {
        GridSpec::new(raw.cell_size_xy, raw.cell_size_z)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cell_size_xy: DEFAULT_CELL_SIZE_XY,
            cell_size_z: DEFAULT_CELL_SIZE_Z,
        }
    }
}

impl GridSpec {
    pub fn new(cell_size_xy: i32, cell_size_z: i32) -> Result<Self, TraceError> {
        if cell_size_xy <= 0 {
            return Err(TraceError::invalid_argument(format!(
                "cell_size_xy must be positive, got {cell_size_xy}"
            )));
        }
        if cell_size_z <= 0 {
            return Err(TraceError::invalid_argument(format!(
                "cell_size_z must be positive, got {cell_size_z}"
            )));
        }

        Ok(Self {
            cell_size_xy,
            cell_size_z,
        })
    }

    pub fn cell_size_xy(&self) -> i32 {
        self.cell_size_xy
    }

    pub fn cell_size_z(&self) -> i32 {
        self.cell_size_z
    }

    pub fn cell_size(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X | Axis::Y => self.cell_size_xy,
            Axis::Z => self.cell_size_z,
        }
    }

    /// Biases negative coordinates by `cell_size - 1` so that truncating division
    /// rounds toward negative infinity.
    ///
    /// Widened to `i64` because the bias can push `i32::MIN` out of range.
    pub fn normalize(&self, point: Point3) -> [i64; 3] {
        [
            bias_negative(point.x, self.cell_size_xy),
            bias_negative(point.y, self.cell_size_xy),
            bias_negative(point.z, self.cell_size_z),
        ]
    }

    /// The cell containing `point`.
    pub fn to_grid(&self, point: Point3) -> GridCoord {
        let [x, y, z] = self.normalize(point);
        // Quotients are no larger in magnitude than the input i32 coordinates.
        GridCoord {
            gx: (x / i64::from(self.cell_size_xy)) as i32,
            gy: (y / i64::from(self.cell_size_xy)) as i32,
            gz: (z / i64::from(self.cell_size_z)) as i32,
        }
    }

    /// The minimum corner of `cell`, or `None` if it lies outside the `i32` range.
    pub fn cell_origin(&self, cell: GridCoord) -> Option<Point3> {
        Some(Point3 {
            x: cell.gx.checked_mul(self.cell_size_xy)?,
            y: cell.gy.checked_mul(self.cell_size_xy)?,
            z: cell.gz.checked_mul(self.cell_size_z)?,
        })
    }
}

fn bias_negative(value: i32, cell_size: i32) -> i64 {
    let value = i64::from(value);
    if value < 0 {
        value - (i64::from(cell_size) - 1)
    } else {
        value
    }
}
