//! Marsgaze CLI entry point.

use anyhow::Result;
use clap::Parser;

use marsgaze::cli::{commands, Cli, Commands};
use marsgaze::infrastructure::config::ConfigLoader;
use marsgaze::infrastructure::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        if json {
            eprintln!("{}", serde_json::json!({ "error": err.to_string() }));
        } else {
            eprintln!("{} {err:#}", console::style("error:").red().bold());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    logging::init(&config.logging)?;

    match cli.command {
        Commands::List(args) => commands::properties::execute_list(args, &config, cli.json).await,
        Commands::Show(args) => commands::properties::execute_show(args, &config, cli.json).await,
    }
}
