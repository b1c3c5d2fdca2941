use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notekeeper")]
#[command(version, about = "A small note-taking backend with AI summaries")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// Database file (overrides NOTES_DB_PATH)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Create the database file and schema
    Init {
        /// Database file (overrides NOTES_DB_PATH)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Print the stored notes
    List {
        /// Database file (overrides NOTES_DB_PATH)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
