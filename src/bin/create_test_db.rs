use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{NewRecord, RecordName, create_record, initialize_db, seed_default_categories};

/// A utility for creating a test database for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_RECORDS: [(&str, f64, &str); 6] = [
    ("Groceries", 84.3, "Food"),
    ("Lunch", 12.0, "Food"),
    ("Bus fare", 3.5, "Transport"),
    ("Movie tickets", 32.0, "Entertainment"),
    ("Power bill", 120.75, "Home"),
    ("Birthday present", 45.0, "Other"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating default categories...");
    seed_default_categories(&conn)?;

    println!("Creating sample records...");
    for (name, amount, category) in SAMPLE_RECORDS {
        create_record(
            NewRecord {
                name: RecordName::new(name)?,
                amount,
                category_title: category.to_owned(),
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
