//! Catalog MOQ CLI
//!
//! ```bash
//! catalog-moq prepare catalog.csv              # Write moq_updates.json
//! catalog-moq prepare catalog.csv -o -         # Payload to stdout
//! catalog-moq preview catalog.csv --rows 10    # Show sample rows
//! catalog-moq search catalog.csv Booster       # Find rows mentioning a term
//! ```
//!
//! The catalog path may also come from `CATALOG_CSV` (a `.env` file is read).

use catalog_moq::config::{
    DEFAULT_OUTPUT, DEFAULT_PREVIEW_ROWS, ENV_CATALOG, ENV_DELIMITER, ENV_OUTPUT,
};
use catalog_moq::logs::{log_info, log_success, LOGGER};
use catalog_moq::{
    parse_csv_file_auto, preview_rows, prepare_file, search_bytes, write_updates_to,
    PrepareOptions,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "catalog-moq")]
#[command(about = "Prepare MOQ updates from a product catalog export", long_about = None)]
struct Cli {
    /// Only print results, no progress logs
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the MOQ update payload
    Prepare {
        /// Catalog CSV export
        #[arg(env = ENV_CATALOG)]
        input: PathBuf,

        /// Output file ("-" for stdout)
        #[arg(short, long, env = ENV_OUTPUT, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long, env = ENV_DELIMITER)]
        delimiter: Option<char>,
    },

    /// Print the columns and the first rows
    Preview {
        /// Catalog CSV export
        #[arg(env = ENV_CATALOG)]
        input: PathBuf,

        /// Number of rows to show
        #[arg(short, long, default_value_t = DEFAULT_PREVIEW_ROWS)]
        rows: usize,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long, env = ENV_DELIMITER)]
        delimiter: Option<char>,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search every record for a term (case-insensitive)
    Search {
        /// Catalog CSV export
        #[arg(env = ENV_CATALOG)]
        input: PathBuf,

        /// Text to look for
        term: String,

        /// CSV delimiter
        #[arg(short, long, env = ENV_DELIMITER, default_value_t = ',')]
        delimiter: char,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    LOGGER.set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Prepare {
            input,
            output,
            delimiter,
        } => cmd_prepare(&input, &output, delimiter),

        Commands::Preview {
            input,
            rows,
            delimiter,
            json,
        } => cmd_preview(&input, rows, delimiter, json),

        Commands::Search {
            input,
            term,
            delimiter,
            json,
        } => cmd_search(&input, &term, delimiter, json),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_prepare(
    input: &Path,
    output: &Path,
    delimiter: Option<char>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = PrepareOptions { delimiter };
    let run = prepare_file(input, &options)?;

    write_updates_to(&run.outcome.records, output)?;

    // The summary goes to stderr so `-o -` keeps stdout pure JSON
    eprintln!("{}", run.outcome.summary());
    Ok(())
}

fn cmd_preview(
    input: &Path,
    rows: usize,
    delimiter: Option<char>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("📄 Previewing: {}", input.display()));
    let parsed = parse_csv_file_auto(input, delimiter)?;
    let preview = preview_rows(&parsed.rows, rows);

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!("Columns: {}", parsed.headers.join(", "));
    for row in &preview {
        println!("{}", row);
    }
    Ok(())
}

fn cmd_search(
    input: &Path,
    term: &str,
    delimiter: char,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("🔎 Searching '{}' in: {}", term, input.display()));
    let bytes = fs::read(input)?;
    let matches = search_bytes(&bytes, delimiter, term)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for m in &matches {
            println!("{}", m);
        }
    }

    log_success(format!("{} matching records", matches.len()));
    Ok(())
}
