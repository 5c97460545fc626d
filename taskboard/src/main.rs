use anyhow::Result;
use clap::Parser;

use taskboard::commands::Cli;
use taskboard::App;
use taskboard_auth::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (_log_path, _log_guard) = taskboard::logging::init_logging()?;

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::new()?,
    };
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }

    let output = App::new(settings).run(cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
