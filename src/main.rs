//! Gridcalc - headless host for the gridcalc sheet model

mod config;
mod edits;

use anyhow::{Context, Result};
use std::env;
use std::io::Write;
use std::path::PathBuf;

use edits::{Edit, parse_cell_name, parse_script};
use gridcalc_core::storage::write_markdown;
use gridcalc_core::{CellRef, DisplayGrid, Sheet};

fn print_usage() {
    eprintln!("Usage: gridcalc [OPTIONS] [SCRIPT]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SCRIPT]                  Edit script, one `CELL INPUT` per line");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --cell <CELL> <INPUT> Set a cell (can be repeated)");
    eprintln!("  --clear <CELL>            Clear a cell (can be repeated)");
    eprintln!("  --get <CELL>              Print a cell's textual value (can be repeated)");
    eprintln!("  -o, --output <FILE>       Write markdown to a file instead of stdout");
    eprintln!("  --config <FILE>           Load settings from a TOML file");
    eprintln!("  -h, --help                Print help");
}

fn usage_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    print_usage();
    std::process::exit(2);
}

struct Options {
    script: Option<PathBuf>,
    edits: Vec<Edit>,
    gets: Vec<CellRef>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        script: None,
        edits: Vec::new(),
        gets: Vec::new(),
        output: None,
        config: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-c" | "--cell" => {
                if i + 2 >= args.len() {
                    usage_error("--cell requires a cell and an input");
                }
                options.edits.push(Edit::Set {
                    cell_ref: parse_cell_name(&args[i + 1])?,
                    input: args[i + 2].clone(),
                });
                i += 2;
            }
            "--clear" => {
                i += 1;
                if i >= args.len() {
                    usage_error("--clear requires a cell");
                }
                options.edits.push(Edit::Clear {
                    cell_ref: parse_cell_name(&args[i])?,
                });
            }
            "--get" => {
                i += 1;
                if i >= args.len() {
                    usage_error("--get requires a cell");
                }
                options.gets.push(parse_cell_name(&args[i])?);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    usage_error("--output requires a file path");
                }
                options.output = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    usage_error("--config requires a file path");
                }
                options.config = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                usage_error(&format!("Unknown option: {}", arg));
            }
            _ => {
                if options.script.is_none() {
                    options.script = Some(PathBuf::from(&args[i]));
                } else {
                    usage_error(&format!("Unexpected argument: {}", args[i]));
                }
            }
        }
        i += 1;
    }
    Ok(options)
}

/// Apply every edit, reporting rejected ones. Returns false if any was rejected.
fn apply_edits(sheet: &mut Sheet, screen: &mut DisplayGrid, edits: &[Edit]) -> bool {
    let mut all_applied = true;
    for edit in edits {
        if let Err(e) = edit.apply(sheet, screen) {
            eprintln!("Error: {}: {}", edit.cell_ref(), e);
            all_applied = false;
        }
    }
    all_applied
}

fn run(args: &[String]) -> Result<bool> {
    let options = parse_args(args)?;

    let (config, warnings) = config::load_config(options.config.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let mut edits = match &options.script {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_script(&content).with_context(|| format!("Invalid script {}", path.display()))?
        }
        None => Vec::new(),
    };
    edits.extend(options.edits);

    let mut sheet = Sheet::with_precision(config.precision);
    let mut screen = DisplayGrid::new();
    let all_applied = apply_edits(&mut sheet, &mut screen, &edits);

    match &options.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_markdown(&mut file, &screen, &config.title)?;
            eprintln!("Result written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_markdown(&mut out, &screen, &config.title)?;
            out.flush()?;
        }
    }

    for cell_ref in options.gets {
        println!("{}: {}", cell_ref, sheet.get_textual_value(cell_ref)?);
    }

    Ok(all_applied)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
