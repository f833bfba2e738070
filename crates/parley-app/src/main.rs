mod cli;
mod dotenv;
mod repl;
mod setup;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use parley_chat::{ChannelSink, ChatHost, HostSettings, Identity};
use parley_common::ParleyError;
use parley_config::{Credentials, ParleyConfig};
use tracing_subscriber::EnvFilter;

/// Load and validate the config file. Returns the path it came from.
fn load_config(args: &cli::Args) -> Result<(ParleyConfig, Option<PathBuf>), ParleyError> {
    let loaded = match &args.config {
        Some(path) => (parley_config::load_config_from(path)?, Some(path.clone())),
        None => (
            parley_config::load_config()?,
            parley_config::toml_loader::default_config_path().ok(),
        ),
    };
    Ok(loaded)
}

fn init_logging(args: &cli::Args, config: &ParleyConfig) {
    let directive = args
        .log_level
        .clone()
        .or_else(|| std::env::var("PARLEY_LOG").ok())
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("parley=info")),
        )
        .init();
}

async fn run(
    args: cli::Args,
    config: ParleyConfig,
    credentials: Credentials,
) -> Result<(), ParleyError> {
    let provider = args.provider.unwrap_or(config.completion.provider);
    let completer = setup::build_completer(&config.completion, provider, &credentials)?;
    let auth = setup::build_auth_policy(&config.auth.providers, &credentials);

    let (sink, rx) = ChannelSink::channel(64);
    let printer = tokio::spawn(repl::print_outbound(rx));

    let host = ChatHost::new(completer, Arc::new(sink))
        .with_auth_policy(auth)
        .with_settings(HostSettings::from_config(&config));

    let user = args.user_name();
    let token = std::env::var("PARLEY_AUTH_TOKEN").unwrap_or_default();
    let identity = host.on_auth(
        &args.auth_provider,
        &token,
        &serde_json::json!({ "user": user }),
        Identity::new(user.clone()),
    );
    if identity.is_none() && host.settings().auth_required {
        return Err(ParleyError::Auth(format!(
            "login as '{user}' via '{}' was rejected",
            args.auth_provider
        )));
    }

    let result = repl::run(&host, identity).await;

    drop(host);
    let _ = printer.await;
    result
}

fn main() -> ExitCode {
    // Environment is written only here, before any runtime thread exists.
    dotenv::load_dotenv();

    let args = cli::parse();

    let (mut config, source) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("parley: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&args, &config);
    match &source {
        Some(path) => tracing::info!(path = %path.display(), "config loaded"),
        None => tracing::info!("config loaded from defaults"),
    }

    let credentials = Credentials::from_env(&config.auth.providers);
    if let Err(e) = parley_config::apply_env_overrides(&mut config, &credentials) {
        tracing::error!(error = %e, "environment overrides produced an invalid config");
        eprintln!("parley: {e}");
        return ExitCode::FAILURE;
    }

    if args.print_config {
        println!("{}", parley_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to start async runtime");
            eprintln!("parley: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config, credentials)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "parley exited with an error");
            eprintln!("parley: {e}");
            ExitCode::FAILURE
        }
    }
}
