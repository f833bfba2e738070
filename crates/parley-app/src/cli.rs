use std::path::PathBuf;

use clap::Parser;
use parley_config::ProviderKind;

/// Parley: chat with a generative model from the terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `parley=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Completion provider override (gemini, echo).
    #[arg(long)]
    pub provider: Option<ProviderKind>,

    /// Name to log in as. Defaults to $USER.
    #[arg(long)]
    pub user: Option<String>,

    /// Provider id passed to the login callback.
    #[arg(long, default_value = "local")]
    pub auth_provider: String,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    pub fn user_name(&self) -> String {
        self.user
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| "local".to_string())
    }
}

pub fn parse() -> Args {
    Args::parse()
}
