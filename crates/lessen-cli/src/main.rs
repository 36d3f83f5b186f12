use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use lessen::{build_tree, extract_variables, parse_with_skips, render, Error, Result};

mod cli;

use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let css = read_input(cli.input.as_deref())?;
    if css.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    // Skips are recoverable, so they warn rather than fail; run with
    // RUST_LOG=warn to see what a lossy conversion dropped.
    let (sheet, skipped) = parse_with_skips(&css);
    for skip in &skipped {
        log::warn!("{skip}");
    }

    let tree = build_tree(&sheet);
    let less = if cli.variables {
        let vars = extract_variables(&sheet);
        render(&tree, Some(&vars))
    } else {
        render(&tree, None)
    };

    write_output(cli.output.as_deref(), &less)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut css = String::new();
            io::stdin().read_to_string(&mut css)?;
            Ok(css)
        }
    }
}

fn write_output(path: Option<&Path>, less: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, less)?,
        None => io::stdout().write_all(less.as_bytes())?,
    }
    Ok(())
}
