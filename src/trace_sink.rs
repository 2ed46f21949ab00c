use crate::coordinate_system::cartesian::GridCoord;
use log::{debug, trace};

/// Receives every cell a traversal visits, in order, as it is produced.
///
/// Sinks observe the walk; they never change the cells it returns.
pub trait TraceSink {
    /// Called once before the first cell, with the start and end cells.
    fn begin(&mut self, _from: GridCoord, _to: GridCoord) {}

    fn emit(&mut self, cell: GridCoord);
}

impl<F: FnMut(GridCoord)> TraceSink for F {
    fn emit(&mut self, cell: GridCoord) {
        self(cell)
    }
}

/// Discards everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoSink;

impl TraceSink for NoSink {
    fn emit(&mut self, _cell: GridCoord) {}
}

/// Forwards the walk to the `log` facade: the endpoints at debug level, each cell at trace level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn begin(&mut self, from: GridCoord, to: GridCoord) {
        debug!("from {from} --> to {to}");
    }

    fn emit(&mut self, cell: GridCoord) {
        trace!("{cell}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<S: TraceSink>(mut sink: S, cells: &[GridCoord]) {
        sink.begin(cells[0], cells[cells.len() - 1]);
        for &cell in cells {
            sink.emit(cell);
        }
    }

    #[test]
    fn test_closure_sink() {
        let cells = [
            GridCoord::new(0, 0, 0),
            GridCoord::new(0, 0, 1),
            GridCoord::new(1, 0, 1),
        ];
        let mut seen = Vec::new();
        feed(|cell: GridCoord| seen.push(cell), &cells);
        assert_eq!(seen, cells);
    }

    #[test]
    fn test_silent_sinks_accept_cells() {
        let cells = [GridCoord::new(-1, -1, -1), GridCoord::new(-2, -1, -1)];
        feed(NoSink, &cells);
        feed(LogSink, &cells);
    }
}
