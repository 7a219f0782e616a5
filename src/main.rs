//! Главный исполняемый файл ddlschema

use ddlschema::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // RUST_LOG имеет приоритет над конфигурацией
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .init();

    log::debug!("Loaded configuration: {:?}", config);
    cli.execute(&config)
}
