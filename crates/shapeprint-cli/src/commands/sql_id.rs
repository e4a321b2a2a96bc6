//! Sql-id command implementation.

use shapeprint_canonical::Digest;
use shapeprint_core::try_sql_fingerprint;
use shapeprint_sql::SqlParameterizer;

use crate::input::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let parameterized = try_sql_fingerprint(&text, &SqlParameterizer::default())
        .map_err(|e| format!("SQL parameterization failed: {}", e))?;
    println!("{}", Digest::of_str(&parameterized));
    Ok(())
}
