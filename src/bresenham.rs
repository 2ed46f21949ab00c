//! Integer-only voxel traversal of a straight segment.
//!
//! The walk keeps one Bresenham decision variable per coordinate plane (XY, XZ, YZ).
//! Each variable is the signed area between the segment and the next cell corner in
//! the direction of travel, projected onto its plane. Its sign says which of the
//! plane's two boundaries the segment reaches first. After setup the loop only adds
//! precomputed deltas and compares against zero.

use crate::coordinate_system::cartesian::{GridCoord, Point3};
use crate::coordinate_system::grid::{Axis, GridSpec};
use crate::error::TraceError;
use crate::trace_sink::{NoSink, TraceSink};
use log::{debug, error};
use std::iter::FusedIterator;

/// Walks segments across a fixed grid.
///
/// Holds nothing but the grid, so one tracer can serve any number of threads.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GridLineTracer {
    grid: GridSpec,
}

impl GridLineTracer {
    pub fn new(grid: GridSpec) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Lazily yields every cell from the one containing `start` to the one containing `end`,
    /// both included. Consecutive cells share a face.
    pub fn cells(&self, start: Point3, end: Point3) -> Trace {
        self.cells_with_sink(start, end, NoSink)
    }

    /// Like [`cells`](Self::cells), reporting each yielded cell to `sink` as well.
    pub fn cells_with_sink<S: TraceSink>(&self, start: Point3, end: Point3, sink: S) -> Trace<S> {
        Trace::new(&self.grid, start, end, sink)
    }

    /// Collects the full traversal.
    pub fn trace(&self, start: Point3, end: Point3) -> Result<Vec<GridCoord>, TraceError> {
        self.cells(start, end).collect()
    }

    pub fn trace_with_sink<S: TraceSink>(
        &self,
        start: Point3,
        end: Point3,
        sink: S,
    ) -> Result<Vec<GridCoord>, TraceError> {
        self.cells_with_sink(start, end, sink).collect()
    }
}

/// Traverses the segment `start`..`end` over a grid with the given cell sizes.
///
/// Fails with [`TraceError::InvalidArgument`] if either cell size is not positive.
pub fn traverse(
    start: Point3,
    end: Point3,
    cell_size_xy: i32,
    cell_size_z: i32,
) -> Result<Vec<GridCoord>, TraceError> {
    let grid = GridSpec::new(cell_size_xy, cell_size_z)?;
    GridLineTracer::new(grid).trace(start, end)
}

/// One axis of the segment, widened so the plane products cannot overflow.
#[derive(Debug, Copy, Clone)]
struct AxisFrame {
    start: i128,
    delta: i128,
    /// The cell boundary the segment crosses first along this axis.
    corner: i128,
    cell_size: i128,
    /// +1 or -1. An axis with no extent gets -1; its start and end cells match, so it is never stepped.
    inc: i128,
}

impl AxisFrame {
    fn new(start: i32, end: i32, from_cell: i32, cell_size: i32) -> Self {
        let inc: i128 = if end > start { 1 } else { -1 };
        let cell_size = i128::from(cell_size);
        let mut corner = i128::from(from_cell) * cell_size;
        if inc > 0 {
            corner += cell_size;
        }

        Self {
            start: i128::from(start),
            delta: i128::from(end) - i128::from(start),
            corner,
            cell_size,
            inc,
        }
    }
}

/// Decision variable for one coordinate plane, spanned by axes `a` and `b`.
///
/// Positive means the segment reaches the `b` boundary before the `a` boundary.
#[derive(Debug, Copy, Clone)]
struct PlaneCrossing {
    value: i128,
    /// Added when the walk advances along `a`.
    step_a: i128,
    /// Added when the walk advances along `b`.
    step_b: i128,
}

impl PlaneCrossing {
    fn new(a: &AxisFrame, b: &AxisFrame) -> Self {
        let value = b.delta * (a.corner - a.start) - a.delta * (b.corner - b.start);
        let step_a = b.delta * a.cell_size * a.inc;
        let step_b = -a.delta * b.cell_size * b.inc;

        // Flip opposing quadrants so "positive means b first" holds for every direction.
        if a.inc != b.inc {
            Self {
                value: -value,
                step_a: -step_a,
                step_b: -step_b,
            }
        } else {
            Self {
                value,
                step_a,
                step_b,
            }
        }
    }

    /// On a tie the `b` axis wins while it still has cells left to cover.
    fn favors_b(&self, b_pending: bool) -> bool {
        self.value > 0 || (self.value == 0 && b_pending)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Start,
    Walking,
    Done,
}

/// Iterator over the cells of one traversal. Created by [`GridLineTracer::cells`].
///
/// Yields the start cell first and the end cell last. If the walk ever needs more steps
/// than the cell span allows, it yields a single
/// [`TraceError::InternalInvariantViolation`] and stops.
#[derive(Debug)]
pub struct Trace<S: TraceSink = NoSink> {
    current: GridCoord,
    target: GridCoord,
    inc: [i32; 3],
    xy: PlaneCrossing,
    xz: PlaneCrossing,
    yz: PlaneCrossing,
    steps: u64,
    max_steps: u64,
    phase: Phase,
    sink: S,
}

impl<S: TraceSink> Trace<S> {
    fn new(grid: &GridSpec, start: Point3, end: Point3, mut sink: S) -> Self {
        let from = grid.to_grid(start);
        let to = grid.to_grid(end);

        let x = AxisFrame::new(start.x, end.x, from.gx, grid.cell_size(Axis::X));
        let y = AxisFrame::new(start.y, end.y, from.gy, grid.cell_size(Axis::Y));
        let z = AxisFrame::new(start.z, end.z, from.gz, grid.cell_size(Axis::Z));

        debug!("from {start} --> to {end}, cells {from} --> {to}");
        sink.begin(from, to);

        Self {
            current: from,
            target: to,
            inc: [x.inc as i32, y.inc as i32, z.inc as i32],
            xy: PlaneCrossing::new(&x, &y),
            xz: PlaneCrossing::new(&x, &z),
            yz: PlaneCrossing::new(&y, &z),
            steps: 0,
            max_steps: from.manhattan_distance(to),
            phase: Phase::Start,
            sink,
        }
    }

    /// Number of steps a correct walk takes: one per unit of cell distance.
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    pub fn target(&self) -> GridCoord {
        self.target
    }

    fn next_axis(&self) -> Axis {
        let y_pending = self.current.gy != self.target.gy;
        let z_pending = self.current.gz != self.target.gz;

        if self.xy.favors_b(y_pending) {
            if self.yz.favors_b(z_pending) {
                Axis::Z
            } else {
                Axis::Y
            }
        } else if self.xz.favors_b(z_pending) {
            Axis::Z
        } else {
            Axis::X
        }
    }

    fn advance(&mut self, axis: Axis) {
        match axis {
            Axis::X => {
                self.current.gx += self.inc[0];
                self.xy.value += self.xy.step_a;
                self.xz.value += self.xz.step_a;
            }
            Axis::Y => {
                self.current.gy += self.inc[1];
                self.xy.value += self.xy.step_b;
                self.yz.value += self.yz.step_a;
            }
            Axis::Z => {
                self.current.gz += self.inc[2];
                self.xz.value += self.xz.step_b;
                self.yz.value += self.yz.step_b;
            }
        }
    }
}

impl<S: TraceSink> Iterator for Trace<S> {
    type Item = Result<GridCoord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => return None,
            Phase::Start => {
                self.phase = Phase::Walking;
                self.sink.emit(self.current);
                return Some(Ok(self.current));
            }
            Phase::Walking => {}
        }

        if self.current == self.target {
            self.phase = Phase::Done;
            return None;
        }

        if self.steps >= self.max_steps {
            self.phase = Phase::Done;
            error!(
                "Traversal toward {} overran its bound at {} after {} steps",
                self.target, self.current, self.steps
            );
            return Some(Err(TraceError::InternalInvariantViolation {
                steps: self.steps + 1,
                max_steps: self.max_steps,
            }));
        }

        let axis = self.next_axis();
        self.advance(axis);
        self.steps += 1;
        self.sink.emit(self.current);
        Some(Ok(self.current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.phase == Phase::Done {
            return (0, Some(0));
        }
        let pending_start = usize::from(self.phase == Phase::Start);
        let lower = pending_start.max(usize::from(self.current != self.target));
        // One more than the remaining steps for a possible overrun error.
        let upper = usize::try_from(self.max_steps - self.steps)
            .ok()
            .and_then(|n| n.checked_add(pending_start + 1));
        (lower, upper)
    }
}

impl<S: TraceSink> FusedIterator for Trace<S> {}
