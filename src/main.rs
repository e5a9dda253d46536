use clap::Parser;
use dotenvy::dotenv;
use medbay::{cli::Cli, config, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Load .env file (before anything reads the environment)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally

    let cli = Cli::parse();

    // 2. Load settings; the log filter comes from here when RUST_LOG is unset
    let settings = config::load_settings(&cli.config)?;

    // 3. Initialize tracing, on stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    info!("Loaded settings from {}", cli.config.display());

    // 4. Open the store for today; reconciliation happens here
    let mut store = config::open_store(&settings)
        .inspect_err(|e| error!("Failed to open medicine store: {}", e))?;

    // 5. Run the command
    let output = medbay::cli::run(cli.command, &mut store, &settings)
        .inspect_err(|e| error!("Command failed: {}", e))?;
    println!("{output}");

    Ok(())
}
