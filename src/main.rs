use clap::Parser;
use colored::*;
use gridtrace::args::{validate_args, Args};
use gridtrace::output::TraceReport;
use gridtrace::{GridLineTracer, LogSink};
use log::LevelFilter;
use std::io::{self, Write};
use std::process::ExitCode;

fn print_banner() {
    let version: &str = env!("CARGO_PKG_VERSION");
    println!(
        "{} {}\n",
        "gridtrace".bright_white().bold(),
        format!("v{version}").dimmed()
    );
}

fn init_logger(debug: bool) {
    let default_level = if debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), String> {
    validate_args(args)?;
    let grid = args.grid()?;

    if !args.quiet && !args.json {
        println!(
            "{} Tracing {} --> {} over {}x{}x{} cells...",
            "[1/2]".bold(),
            args.start,
            args.end,
            grid.cell_size_xy(),
            grid.cell_size_xy(),
            grid.cell_size_z()
        );
    }

    let cells = GridLineTracer::new(grid)
        .trace_with_sink(args.start, args.end, LogSink)
        .map_err(|e| e.to_string())?;
    let report = TraceReport::new(grid, args.start, args.end, cells);

    if !args.quiet && !args.json {
        println!("{} Writing cells...", "[2/2]".bold());
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if args.json {
        report.write_json(&mut out)
    } else {
        report.write_text(&mut out)
    }
    .and_then(|()| out.flush())
    .map_err(|e| format!("Failed to write output: {e}"))
}

fn main() -> ExitCode {
    let args: Args = Args::parse();
    init_logger(args.debug);

    if !args.quiet && !args.json {
        print_banner();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error! {e}").red().bold());
            ExitCode::FAILURE
        }
    }
}
