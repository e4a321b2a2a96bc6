//! Shapeprint CLI - shape fingerprints for JSON documents and SQL statements.

use clap::{Parser, Subcommand};

mod commands;
mod input;

use commands::{canonical, id, keys, sql, sql_id};

#[derive(Parser)]
#[command(name = "shapeprint")]
#[command(about = "Shape fingerprints for JSON documents and SQL statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fingerprint identifier for a JSON document
    Id {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Print the sorted key paths for a JSON document
    Keys {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Print the canonical (value-blind) form of a JSON document
    Canonical {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Print the fingerprint identifier for a SQL statement
    SqlId {
        /// Input SQL file (or stdin if not provided)
        input: Option<String>,
    },
    /// Print the parameterized form of a SQL statement
    Sql {
        /// Input SQL file (or stdin if not provided)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Id { input } => id::run(input),
        Commands::Keys { input } => keys::run(input),
        Commands::Canonical { input } => canonical::run(input),
        Commands::SqlId { input } => sql_id::run(input),
        Commands::Sql { input } => sql::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
