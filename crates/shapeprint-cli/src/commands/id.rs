//! Id command implementation.

use shapeprint_canonical::Canonicalizer;
use shapeprint_core::try_fingerprint_id;

use crate::input::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let digest = try_fingerprint_id(&text, &Canonicalizer::default())
        .map_err(|e| format!("Fingerprinting failed: {}", e))?;
    println!("{}", digest);
    Ok(())
}
