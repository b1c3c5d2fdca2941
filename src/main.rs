use clap::Parser;
use notekeeper::cli::{handle_init, handle_list, handle_serve, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port, db } => handle_serve(host, port, db),
        Commands::Init { db } => handle_init(db),
        Commands::List { db, json } => handle_list(db, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
