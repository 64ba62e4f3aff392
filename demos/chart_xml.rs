//! Command-line tool for inspecting and generating chart parts.
//!
//! # Usage
//!
//! Summarize an existing chart part (e.g. extracted from `xl/charts/chart1.xml`):
//! ```sh
//! cargo run --example chart_xml -- dump chart1.xml
//! ```
//!
//! Generate a chart part from a cell range:
//! ```sh
//! cargo run --example chart_xml -- generate --sheet "Q1 Sales" --range B2:D20 --chart-type line -o chart1.xml
//! ```
//!
//! Diagnostics go through `tracing`; set `RUST_LOG=sheetchart=debug` to see
//! what the reader skipped.

use clap::{Parser, Subcommand, ValueEnum};
use sheetchart::ooxml::charts::{
    Chart, ChartStyle, ChartType, ChartWriterOptions, MarkerType, parse_chart,
    write_chart_with_options,
};
use sheetchart::sheet::{CellRange, SheetInfo};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect and generate spreadsheet chart parts
#[derive(Parser, Debug)]
#[command(name = "chart_xml", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chart type, series and axes of a chart part
    Dump {
        /// Chart part to read
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
    /// Write a chart part whose series are derived from a cell range
    Generate {
        /// Worksheet holding the data
        #[arg(long, default_value = "Sheet1")]
        sheet: String,

        /// Data range in A1 notation
        #[arg(long)]
        range: CellRange,

        /// Chart type
        #[arg(long, value_enum, default_value = "bar")]
        chart_type: ChartTypeArg,

        /// Draw lines between points (scatter only)
        #[arg(long)]
        lines: bool,

        /// Omit the XML declaration
        #[arg(long)]
        no_declaration: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChartTypeArg {
    Area,
    Area3d,
    Bar,
    Bar3d,
    Line,
    Line3d,
    Pie,
    Pie3d,
    Doughnut,
    Scatter,
}

impl From<ChartTypeArg> for ChartType {
    fn from(arg: ChartTypeArg) -> Self {
        match arg {
            ChartTypeArg::Area => ChartType::Area,
            ChartTypeArg::Area3d => ChartType::Area3D,
            ChartTypeArg::Bar => ChartType::Bar,
            ChartTypeArg::Bar3d => ChartType::Bar3D,
            ChartTypeArg::Line => ChartType::Line,
            ChartTypeArg::Line3d => ChartType::Line3D,
            ChartTypeArg::Pie => ChartType::Pie,
            ChartTypeArg::Pie3d => ChartType::Pie3D,
            ChartTypeArg::Doughnut => ChartType::Doughnut,
            ChartTypeArg::Scatter => ChartType::Scatter,
        }
    }
}

fn dump(input: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let chart = parse_chart(BufReader::new(File::open(&input)?))?;

    match chart.chart_type {
        Some(chart_type) => println!("type:   {}", chart_type),
        None => println!("type:   (none)"),
    }
    println!("style:  {:?}", chart.style);

    for (i, series) in chart.series().iter().enumerate() {
        println!(
            "series {}: values={} categories={} marker={:?}",
            i,
            series.values().unwrap_or("-"),
            series.category().unwrap_or("-"),
            series.marker
        );
    }
    for axis in &chart.axes {
        println!(
            "axis {}: {:?} at {:?}, crosses {}",
            axis.id, axis.kind, axis.position, axis.cross_id
        );
    }
    Ok(())
}

fn generate(
    sheet: String,
    range: CellRange,
    chart_type: ChartType,
    lines: bool,
    no_declaration: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut chart = Chart::for_sheet(&SheetInfo::worksheet(sheet));
    chart.set_chart_type(chart_type);
    if lines {
        chart.set_chart_style(ChartStyle::Line);
    }

    let added = chart.add_series(&range, None, MarkerType::Default, None);
    eprintln!("{} series derived from {}", added, range);

    let options = ChartWriterOptions::new().with_xml_declaration(!no_declaration);
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    write_chart_with_options(&mut writer, &chart, &options)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let result = match args.command {
        Command::Dump { input } => dump(input),
        Command::Generate {
            sheet,
            range,
            chart_type,
            lines,
            no_declaration,
            output,
        } => generate(sheet, range, chart_type.into(), lines, no_declaration, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
