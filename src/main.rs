use clap::Parser;
use color_eyre::eyre::Result;

use coderefine::{
    infrastructure::{cli::Cli, config::Config, server},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Defaults, config file and environment, then CLI flags on top
    let mut config = Config::new()?;
    config.apply_cli(&args);
    tracing::debug!(
        config_dir = %config.config._config_dir.display(),
        data_dir = %config.config._data_dir.display(),
        "configuration loaded"
    );

    server::serve(&config).await
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
