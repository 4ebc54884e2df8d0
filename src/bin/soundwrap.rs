//! soundwrap binary entry point
//!
//! Handles `-h`/`--help` and invalid flags before anything external runs,
//! then hands off to the interactive selection flow.

use color_eyre::eyre::Result;
use soundwrap::{
    cli::{HELP, INVALID_FLAG, Invocation},
    commands,
    config::Config,
};

/// Initialize logging
///
/// `RUST_LOG` wins; otherwise the configured `log_level` applies. Logs go to
/// stderr so stdout only carries user-facing messages.
fn init_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    match Invocation::from_args(std::env::args_os()) {
        Invocation::Help => {
            println!("{HELP}");
            Ok(())
        }
        Invocation::InvalidFlag => {
            println!("{INVALID_FLAG}");
            std::process::exit(1);
        }
        Invocation::Run => {
            let config = Config::load()?;
            init_logging(&config.settings.log_level);
            commands::run(&config)
        }
    }
}
