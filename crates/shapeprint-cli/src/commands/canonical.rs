//! Canonical command implementation.

use shapeprint_canonical::Canonicalizer;
use shapeprint_core::try_fingerprint;

use crate::input::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let canonical = try_fingerprint(&text, &Canonicalizer::default())
        .map_err(|e| format!("Canonicalization failed: {}", e))?;
    println!("{}", canonical);
    Ok(())
}
