use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use pennywise::{
    Category, NewBudget, NewGoal, NewTransaction, TransactionKind, create_budget, create_goal,
    create_transaction, initialize_db,
};

/// A utility for creating a database populated with sample data.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

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
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    println!("Creating sample transactions...");

    let today = OffsetDateTime::now_utc().date();
    let last_month = today - Duration::days(30);

    let sample_transactions = [
        (52.40, "Groceries", today, Category::Food, TransactionKind::Expense),
        (18.99, "Streaming subscription", today, Category::Bills, TransactionKind::Expense),
        (120.00, "New shoes", last_month, Category::Shopping, TransactionKind::Expense),
        (85.50, "Train tickets", last_month, Category::Travel, TransactionKind::Expense),
        (2500.00, "Salary", last_month, Category::Other, TransactionKind::Income),
    ];

    for (amount, description, date, category, kind) in sample_transactions {
        create_transaction(
            NewTransaction::new(amount, description, date, category)?.kind(kind),
            &connection,
        )?;
    }

    println!("Creating sample budgets...");

    let current_month = format!("{:04}-{:02}", today.year(), today.month() as u8);

    create_budget(
        NewBudget::new(Category::Food, &current_month, 400.0)?,
        &connection,
    )?;
    create_budget(
        NewBudget::new(Category::Shopping, &current_month, 150.0)?,
        &connection,
    )?;

    println!("Creating sample goal...");

    create_goal(NewGoal::new("Emergency Fund", 5000.0, 1200.0)?, &connection)?;

    println!("Success!");

    Ok(())
}
