use crate::coordinate_system::cartesian::Point3;
use crate::coordinate_system::grid::{GridSpec, DEFAULT_CELL_SIZE_XY, DEFAULT_CELL_SIZE_Z};
use clap::Parser;

/// Command-line arguments parser
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Start point of the segment (x,y,z)
    #[arg(long, allow_hyphen_values = true, value_parser = Point3::from_str, default_value = "0,0,0")]
    pub start: Point3,

    /// End point of the segment (x,y,z)
    #[arg(long, allow_hyphen_values = true, value_parser = Point3::from_str, default_value = "101,101,101")]
    pub end: Point3,

    /// Horizontal cell size, shared by the x and y axes
    #[arg(long, allow_hyphen_values = true, default_value_t = DEFAULT_CELL_SIZE_XY)]
    pub cell_size_xy: i32,

    /// Vertical cell size, used by the z axis
    #[arg(long, allow_hyphen_values = true, default_value_t = DEFAULT_CELL_SIZE_Z)]
    pub cell_size_z: i32,

    /// Print the result as JSON instead of one cell per line
    #[arg(long)]
    pub json: bool,

    /// Suppress the banner and progress lines
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug mode: log every visited cell (optional)
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn grid(&self) -> Result<GridSpec, String> {
        GridSpec::new(self.cell_size_xy, self.cell_size_z).map_err(|e| e.to_string())
    }
}

/// Validates CLI arguments after parsing.
pub fn validate_args(args: &Args) -> Result<(), String> {
    if args.cell_size_xy <= 0 {
        return Err(format!(
            "--cell-size-xy must be a positive integer, got {}",
            args.cell_size_xy
        ));
    }

    if args.cell_size_z <= 0 {
        return Err(format!(
            "--cell-size-z must be a positive integer, got {}",
            args.cell_size_z
        ));
    }

    if args.json && args.debug {
        return Err("--json and --debug cannot be combined.".to_string());
    }

    Ok(())
}
