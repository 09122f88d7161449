use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SinkKind};

/// Terminal landing page for the Desde Tu 7% Isapre quote service.
#[derive(Debug, Clone, Parser)]
#[command(name = "cotizador", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/cotizador/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the submission sink from the config file
    #[arg(long, value_enum, value_name = "SINK")]
    pub sink: Option<SinkKind>,

    /// Log file (default: <cache dir>/cotizador/cotizador.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective config as TOML and exit, without validating it
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(sink) = self.sink {
            config.submission.sink = sink;
        }
    }
}
