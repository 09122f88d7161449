use anyhow::Context;
use clap::Parser;

use cotizador::catalog::Catalog;
use cotizador::cli::Cli;
use cotizador::config::Config;
use cotizador::logging::init_tracing;
use cotizador::submission::ConfiguredSink;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);

    if cli.print_config {
        let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
        print!("{}", rendered);
        return Ok(());
    }

    config.validate()?;

    let log_path = init_tracing(cli.log_file.as_deref()).context("Failed to open log file")?;

    let catalog = Catalog::resolve(config.content.path.as_deref())?;
    let sink = ConfiguredSink::from_config(&config.submission)?;
    tracing::info!(
        sink = sink.name(),
        providers = catalog.providers.len(),
        news = catalog.news.len(),
        log = %log_path.display(),
        "Starting cotizador"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    cotizador::ui::run(&config, catalog, sink, runtime.handle())?;

    tracing::info!("Shutting down");
    Ok(())
}
