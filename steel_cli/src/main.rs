//! # Steel Section Batch Driver
//!
//! Computes sectional area, theoretical weight and surface area for a list
//! of steel section designations, one per line.
//!
//! Usage:
//!   steel_cli [options] [DESIGNATION...]
//!
//! Designations come from the positional arguments, else from `--input`,
//! else from stdin.
//!
//! Options:
//!   --density <t/m³>     Material density (default 7.85)
//!   --config <file>      JSON driver configuration
//!   --input <file>       Read designations from a file
//!   --format <fmt>       Output format: tsv or json
//!   --max-rows <n>       Stop after n rows (default 5000)
//!   --no-area            Omit sectional area
//!   --no-weight          Omit theoretical weight
//!   --no-surface         Omit surface area
//!   --log-level <level>  error, warn, info, debug or trace (default RUST_LOG)
//!
//! Examples:
//!   steel_cli H300*200*6*8 I10 UA25*16*3
//!   steel_cli --density 7.93 --format json --input sections.txt

mod batch;
mod config;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};

use batch::{render_json, render_tsv, run_batch};
use config::{ConfigError, DriverConfig, OutputFormat};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    density: Option<f64>,
    format: Option<OutputFormat>,
    max_rows: Option<usize>,
    no_area: bool,
    no_weight: bool,
    no_surface: bool,
    log_level: Option<LevelFilter>,
    designations: Vec<String>,
    help: bool,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self, ConfigError> {
        let mut parsed = Args::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let mut value = |option: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| ConfigError::invalid_option(option, "missing value"))
            };

            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
                "--input" => parsed.input = Some(PathBuf::from(value("--input")?)),
                "--density" => {
                    let raw = value("--density")?;
                    let density = raw.parse::<f64>().map_err(|_| {
                        ConfigError::invalid_option("--density", format!("'{}' is not a number", raw))
                    })?;
                    parsed.density = Some(density);
                }
                "--format" => parsed.format = Some(value("--format")?.parse()?),
                "--max-rows" => {
                    let raw = value("--max-rows")?;
                    let rows = raw.parse::<usize>().map_err(|_| {
                        ConfigError::invalid_option("--max-rows", format!("'{}' is not a row count", raw))
                    })?;
                    parsed.max_rows = Some(rows);
                }
                "--log-level" => {
                    let raw = value("--log-level")?;
                    let level = raw.parse::<LevelFilter>().map_err(|_| {
                        ConfigError::invalid_option("--log-level", format!("unknown level '{}'", raw))
                    })?;
                    parsed.log_level = Some(level);
                }
                "--no-area" => parsed.no_area = true,
                "--no-weight" => parsed.no_weight = true,
                "--no-surface" => parsed.no_surface = true,
                other if other.starts_with("--") => {
                    return Err(ConfigError::invalid_option(other, "unknown option"));
                }
                other => parsed.designations.push(other.to_string()),
            }
        }

        Ok(parsed)
    }

    /// Config file (or defaults) with command-line overrides applied
    fn driver_config(&self) -> Result<DriverConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::load(path)?,
            None => DriverConfig::default(),
        };

        if let Some(density) = self.density {
            config.set_density(density)?;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(rows) = self.max_rows {
            config.max_rows = rows;
        }
        if self.no_area {
            config.outputs.sectional_area = false;
        }
        if self.no_weight {
            config.outputs.theoretical_weight = false;
        }
        if self.no_surface {
            config.outputs.surface_area = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    builder.target(Target::Stderr);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn read_lines(args: &Args) -> io::Result<Vec<String>> {
    if !args.designations.is_empty() {
        return Ok(args.designations.clone());
    }
    match &args.input {
        Some(path) => Ok(std::fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect()),
        None => io::stdin().lock().lines().collect(),
    }
}

fn print_usage() {
    eprintln!("Steel Section Batch Driver");
    eprintln!();
    eprintln!("Usage: steel_cli [options] [DESIGNATION...]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --density <t/m³>     Material density (default 7.85)");
    eprintln!("  --config <file>      JSON driver configuration");
    eprintln!("  --input <file>       Read designations from a file (default stdin)");
    eprintln!("  --format <fmt>       Output format: tsv or json");
    eprintln!("  --max-rows <n>       Stop after n rows (default 5000)");
    eprintln!("  --no-area            Omit sectional area");
    eprintln!("  --no-weight          Omit theoretical weight");
    eprintln!("  --no-surface         Omit surface area");
    eprintln!("  --log-level <level>  error, warn, info, debug or trace");
}

fn main() -> ExitCode {
    let raw: Vec<String> = env::args().skip(1).collect();

    let args = match Args::parse(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            return ExitCode::from(2);
        }
    };

    if args.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    init_logging(args.log_level);

    let config = match args.driver_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let lines = match read_lines(&args) {
        Ok(lines) => lines,
        Err(e) => {
            error!("Cannot read designations: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Processing {} rows at density {} ({})",
        lines.len().min(config.max_rows),
        config.density,
        config.format
    );
    let report = run_batch(&lines, &config);

    let rendered = match config.format {
        OutputFormat::Tsv => render_tsv(&report),
        OutputFormat::Json => match render_json(&report) {
            Ok(json) => json + "\n",
            Err(e) => {
                error!("Cannot serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
        error!("Cannot write report: {}", e);
        return ExitCode::FAILURE;
    }

    info!("{}", report.summary());
    ExitCode::SUCCESS
}
