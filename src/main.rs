use clap::Parser;

use vitrina::cli::{Cli, Command, run_migrations};
use vitrina::config::Settings;
use vitrina::logger::init_logger;
use vitrina::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    init_logger(&settings.logger)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => Server::new(settings).run().await?,
        Command::Migrate => run_migrations(&settings).await?,
    }

    Ok(())
}
