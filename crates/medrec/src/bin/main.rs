//! medrec command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use medrec::cli::{add, edit, list, output, record, remove, show};
use medrec::{FileStore, KeyValueStore, PatientRepository};
use std::path::PathBuf;
use std::sync::Arc;

/// Patient record management tool
#[derive(Parser)]
#[command(name = "medrec")]
#[command(author, version, about = "Patient record management tools", long_about = None)]
struct Cli {
    /// Directory the patient store lives in
    #[arg(long, default_value = "./medrec-data", global = true)]
    data_dir: PathBuf,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,

    /// Show one patient in full, history included
    Show {
        /// Patient id
        id: String,
    },

    /// Create a patient record
    Add(add::AddArgs),

    /// Edit fields of an existing patient
    Edit(edit::EditArgs),

    /// Delete a patient record
    Remove {
        /// Patient id
        id: String,
    },

    /// Search patients by name, email, phone, or birth date
    Search {
        /// Query string
        query: String,
    },

    /// Append an entry to a patient's medical history
    Record(record::RecordArgs),
}

fn main() {
    human_panic::setup_panic!();
    env_logger::init();

    let cli = Cli::parse();
    output::setup_colors(&cli.color);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&cli.data_dir));
    let repo = PatientRepository::new(store);

    match cli.command {
        Commands::List => list::list(&repo),
        Commands::Show { id } => show::run(&repo, &id),
        Commands::Add(args) => add::run(&repo, args),
        Commands::Edit(args) => edit::run(&repo, args),
        Commands::Remove { id } => remove::run(&repo, &id),
        Commands::Search { query } => list::search(&repo, &query),
        Commands::Record(args) => record::run(&repo, args),
    }
}
