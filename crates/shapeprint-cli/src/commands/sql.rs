//! Sql command implementation.

use shapeprint_core::try_sql_fingerprint;
use shapeprint_sql::SqlParameterizer;

use crate::input::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let parameterized = try_sql_fingerprint(&text, &SqlParameterizer::default())
        .map_err(|e| format!("SQL parameterization failed: {}", e))?;
    println!("{}", parameterized);
    Ok(())
}
