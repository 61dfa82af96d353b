use std::error::Error;

use clap::Parser;
use rusqlite::Connection;

use pennywise::{NewGoal, create_goal, initialize_db};

/// A utility for adding a savings goal to the database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The name of the goal, e.g. "Emergency Fund".
    #[arg(long)]
    name: String,

    /// The target amount to save.
    #[arg(long)]
    target: f64,

    /// The amount saved so far.
    #[arg(long, default_value_t = 0.0)]
    saved: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let connection = Connection::open(&args.db_path)?;
    initialize_db(&connection)?;

    let goal = create_goal(NewGoal::new(&args.name, args.target, args.saved)?, &connection)?;

    println!(
        "Created goal {:?} with target {} (saved {}).",
        goal.name, goal.target, goal.saved
    );

    Ok(())
}
