//! Keys command implementation.

use shapeprint_canonical::Canonicalizer;
use shapeprint_core::try_json_keys;

use crate::input::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let keys = try_json_keys(&text, &Canonicalizer::default())
        .map_err(|e| format!("Key extraction failed: {}", e))?;
    println!("{}", keys);
    Ok(())
}
