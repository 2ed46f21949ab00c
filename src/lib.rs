//! Integer-only traversal of the voxel cells crossed by a 3D line segment.
//!
//! The grid is uniform and axis-aligned. `x` and `y` share one cell size and `z` has
//! its own. [`GridLineTracer`] walks from the cell containing the start point to the
//! cell containing the end point, one face-adjacent cell at a time, using only integer
//! additions and comparisons per step.
//!
//! ```
//! use gridtrace::{GridCoord, GridLineTracer, GridSpec, Point3};
//!
//! let tracer = GridLineTracer::new(GridSpec::new(50, 10).unwrap());
//! let cells = tracer
//!     .trace(Point3::new(0, 0, 0), Point3::new(101, 101, 101))
//!     .unwrap();
//! assert_eq!(cells.first(), Some(&GridCoord::new(0, 0, 0)));
//! assert_eq!(cells.last(), Some(&GridCoord::new(2, 2, 10)));
//! assert_eq!(cells.len(), 15);
//! ```

pub mod args;
pub mod bresenham;
pub mod coordinate_system;
pub mod error;
pub mod output;
pub mod trace_sink;

pub use args::Args;
pub use bresenham::{traverse, GridLineTracer, Trace};
pub use coordinate_system::cartesian::{GridCoord, Point3, Vector3};
pub use coordinate_system::grid::{Axis, GridSpec};
pub use error::TraceError;
pub use trace_sink::{LogSink, NoSink, TraceSink};
