//! nbtgen CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use nbtgen_runtime::generate;

const USAGE: &str = "\
Usage: nbtgen [options] <input_folder> <output_folder>

Compiles YAML dataset descriptions into C++ headers carrying big-endian
binary images.

Arguments:
  input_folder    Folder containing the dataset descriptions (*.yml)
  output_folder   Folder where generated header files are placed

Options:
  -h, --help      Print this help text
  -V, --version   Print version information

Set RUST_LOG=debug for per-file progress output.";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    folders: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            _ => config.folders.push(PathBuf::from(arg)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }
    if config.show_version {
        println!("nbtgen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let [input, output] = config.folders.as_slice() else {
        return Err(format!("expected <input_folder> <output_folder>\n\n{USAGE}").into());
    };

    generate(input, output)?;
    Ok(())
}
