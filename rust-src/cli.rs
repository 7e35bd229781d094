//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::{default_data_dir, DATA_DIR_ENV};
use crate::render::UpcRenderer;


/// UPC barcode generator with a searchable history
#[derive(Parser)]
#[command(name = "upcb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding barcodes.json (default: per-user data directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Generate a UPC-A barcode image from an 11-digit number
    Generate {
        /// The 11-digit number (check digit is computed)
        number: String,

        /// Name for the barcode (default: timestamp-based)
        #[arg(short, long)]
        name: Option<String>,

        /// Output PNG path (default: <name>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List saved barcodes, most recent first
    History {
        /// Only show barcodes whose name or number contains this text
        search: Option<String>,
    },

    /// Save a barcode from history as PNG
    Download {
        /// Position in the history listing, barcode number or name
        selector: String,

        /// Apply the same filter as 'history <SEARCH>' before picking a position
        #[arg(short, long)]
        search: Option<String>,

        /// Output PNG path (default: <name>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the history as CSV
    Export {
        /// Output file path (default: barcode_history.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove all barcodes from history
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print the location of the history file
    Path,
}


/// Run the CLI
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let store = commands::open_store(&data_dir);

    match cli.command {
        Some(Commands::Generate { number, name, output }) => {
            commands::generate::run(&store, &UpcRenderer, &number, name, output)?;
        }
        Some(Commands::History { search }) => {
            commands::history::run(&store, search.as_deref())?;
        }
        Some(Commands::Download { selector, search, output }) => {
            commands::download::run(&store, &selector, search.as_deref(), output)?;
        }
        Some(Commands::Export { output }) => {
            commands::export::run(&store, output)?;
        }
        Some(Commands::Clear { force }) => {
            commands::clear::run(&store, force)?;
        }
        Some(Commands::Path) => {
            println!("{}", store.path().display());
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
