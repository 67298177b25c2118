//! Roman CLI
//!
//! Command-line interface for converting decimal integers to Roman numerals.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use roman_numeral::{Converter, Mode, is_representable, parse_value};
use std::fs;
use std::io::{self, Write};
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("roman")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert decimal integers to Roman numerals")
        .arg(
            Arg::new("numbers")
                .value_name("NUMBER")
                .help("Integers to convert")
                .num_args(1..)
                .allow_negative_numbers(true)
                .index(1),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Read whitespace-separated integers from a file")
                .num_args(1),
        )
        .arg(
            Arg::new("permissive")
                .long("permissive")
                .help("Skip the 1..=3999 range check")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log each conversion to stderr")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("input")
                .args(["numbers", "file"])
                .required(true)
                .multiple(true),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    if let Err(e) = execute(&matches) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn execute(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let mode = if matches.get_flag("permissive") {
        Mode::Permissive
    } else {
        Mode::Strict
    };
    let inputs = collect_inputs(matches)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&Converter::new(mode), &inputs, &mut out)
}

fn collect_inputs(matches: &ArgMatches) -> Result<Vec<String>, anyhow::Error> {
    let mut inputs: Vec<String> = matches
        .get_many::<String>("numbers")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if let Some(path) = matches.get_one::<String>("file") {
        inputs.extend(read_numbers_file(path)?);
    }

    Ok(inputs)
}

fn read_numbers_file(path: &str) -> Result<Vec<String>, anyhow::Error> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Roman: ERR_IO: cannot read {path}"))?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Convert each input in order, writing one numeral per line
///
/// Stops at the first input that fails to parse or convert; numerals for
/// earlier inputs have already been written.
fn run<W: Write>(
    converter: &Converter,
    inputs: &[String],
    out: &mut W,
) -> Result<(), anyhow::Error> {
    for input in inputs {
        let value = parse_value(input)?;
        let roman = converter.convert(value)?;

        if !is_representable(value) {
            warn!(value, numeral = %roman, "value has no standard numeral");
        }
        debug!(value, numeral = %roman, "converted");

        writeln!(out, "{roman}")?;
    }
    out.flush()?;
    Ok(())
}
