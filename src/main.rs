mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries only the key=value line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.lookup_config();

    match tfstate_query::run(&config, &cli.query)? {
        Some(line) => println!("{line}"),
        None => tracing::debug!(query = %cli.query, "no value found, nothing printed"),
    }

    Ok(())
}
