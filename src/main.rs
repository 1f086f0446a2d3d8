//! NutriView CLI - grocery list client with nutrition facts

use clap::Parser;

mod cli;
mod client;
mod config;
mod debounce;
mod error;
mod models;
mod nutrition;
mod output;
mod session;
mod view;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Signup { email, password } => cli::auth::signup(&opts, email, password).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("nutriview version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::List { all, filter } => cli::list::run(&opts, all, filter).await,
        Commands::Show { id } => cli::item::show(&opts, id).await,
        Commands::Search { query, add, pick } => cli::search::run(&opts, &query, add, pick).await,
        Commands::Add { name } => cli::search::add(&opts, &name).await,
        Commands::Edit { id, quantity } => cli::item::edit(&opts, id, &quantity).await,
        Commands::Delete { id, yes } => cli::item::delete(&opts, id, yes).await,
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warn
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
