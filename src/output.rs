use crate::coordinate_system::cartesian::{GridCoord, Point3};
use crate::coordinate_system::grid::GridSpec;
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use std::io::{self, Write};

/// A finished traversal, as printed by the command-line tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceReport {
    pub start: Point3,
    pub end: Point3,
    pub cell_size_xy: i32,
    pub cell_size_z: i32,
    pub cells: Vec<GridCoord>,
    pub steps: usize,
}

impl TraceReport {
    pub fn new(grid: GridSpec, start: Point3, end: Point3, cells: Vec<GridCoord>) -> Self {
        Self {
            start,
            end,
            cell_size_xy: grid.cell_size_xy(),
            cell_size_z: grid.cell_size_z(),
            steps: cells.len().saturating_sub(1),
            cells,
        }
    }

    /// Steps taken along x, y and z.
    pub fn steps_per_axis(&self) -> [usize; 3] {
        self.cells
            .iter()
            .tuple_windows()
            .fold([0; 3], |mut counts, (a, b)| {
                if a.gx != b.gx {
                    counts[0] += 1;
                } else if a.gy != b.gy {
                    counts[1] += 1;
                } else if a.gz != b.gz {
                    counts[2] += 1;
                }
                counts
            })
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "from {} --> to {}", self.start, self.end)?;
        for (index, cell) in self.cells.iter().enumerate() {
            let line = cell.to_string();
            if index == 0 || index + 1 == self.cells.len() {
                writeln!(out, "{}", line.bold())?;
            } else {
                writeln!(out, "{line}")?;
            }
        }

        let [x, y, z] = self.steps_per_axis();
        writeln!(
            out,
            "{} {} steps (x: {x}, y: {y}, z: {z})",
            "Done!".green().bold(),
            self.steps
        )
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bresenham::GridLineTracer;

    fn reference_report() -> TraceReport {
        let grid = GridSpec::default();
        let start = Point3::new(0, 0, 0);
        let end = Point3::new(101, 101, 101);
        let cells = GridLineTracer::new(grid).trace(start, end).unwrap();
        TraceReport::new(grid, start, end, cells)
    }

    #[test]
    fn test_steps_per_axis() {
        let report = reference_report();
        assert_eq!(report.steps, 14);
        assert_eq!(report.steps_per_axis(), [2, 2, 10]);
    }

    #[test]
    fn test_write_text() {
        colored::control::set_override(false);
        let report = reference_report();
        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "from (0,0,0) --> to (101,101,101)");
        assert_eq!(lines[1], "(0,0,0)");
        assert_eq!(lines[15], "(2,2,10)");
        assert_eq!(lines[16], "Done! 14 steps (x: 2, y: 2, z: 10)");
        assert_eq!(lines.len(), 17);
    }

    #[test]
    fn test_write_json() {
        let report = reference_report();
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["steps"], 14);
        assert_eq!(value["cell_size_xy"], 50);
        assert_eq!(value["cell_size_z"], 10);
        assert_eq!(value["start"]["x"], 0);
        assert_eq!(value["end"]["z"], 101);
        assert_eq!(value["cells"].as_array().unwrap().len(), 15);
        assert_eq!(value["cells"][14]["gz"], 10);

        let cells: Vec<GridCoord> = serde_json::from_value(value["cells"].clone()).unwrap();
        assert_eq!(cells, report.cells);
    }

    #[test]
    fn test_single_cell_report() {
        let grid = GridSpec::default();
        let p = Point3::new(-1, -1, -1);
        let cells = GridLineTracer::new(grid).trace(p, p).unwrap();
        let report = TraceReport::new(grid, p, p, cells);
        assert_eq!(report.steps, 0);
        assert_eq!(report.steps_per_axis(), [0, 0, 0]);
        assert_eq!(report.cells, vec![GridCoord::new(-1, -1, -1)]);
    }
}
