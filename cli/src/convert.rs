use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use cocktail_core::{convert_quantities, find_measurements, VolumeUnit};

/// Rewrite measurements in a file (or stdin) and print the result.
pub fn run(to: VolumeUnit, file: Option<&Path>) -> Result<()> {
    let text = read_input(file)?;
    print!("{}", convert_text(&text, to));
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => io::read_to_string(io::stdin()).context("Failed to read stdin"),
    }
}

fn convert_text(text: &str, to: VolumeUnit) -> String {
    let found = find_measurements(text);
    let to_convert = found.iter().filter(|m| m.unit != to).count();
    tracing::info!(
        measurements = found.len(),
        to_convert,
        target = %to,
        "Converting measurements"
    );

    convert_quantities(text, to)
}
