// Entry point: program main
// Parses flags, sets up logging and the shutdown hook, loads the package
// list and runs the TUI.

use clap::Parser;
use lazypm::config::{Args, TuiConfig};
use lazypm::error::{EXIT_ERROR, EXIT_OK, SetupError};
use lazypm::logging::setup_logger;
use lazypm::packages::PackageProvider;
use lazypm::ui::terminal::{check_size, install_shutdown_hook, terminal_size};
use lazypm::ui::{self, Session, Severity};
use lazypm::xbps::Xbps;
use std::process;
use std::time::Instant;
use tracing::{error, info, warn};

async fn start(args: &Args, config: TuiConfig) -> Result<(), SetupError> {
    Xbps::ensure_available()?;
    let (width, height) = terminal_size()?;
    check_size(width, height, &config)?;

    let mut provider = Xbps::new();
    if args.no_sync {
        info!("skipping repository sync");
    } else if let Some(e) = provider.sync()?.close_failure {
        warn!(command = e.command(), error = %e, "sync stream did not close cleanly");
    }

    let listed = provider.list(None)?;
    info!(count = listed.value.len(), "loaded package list");

    let mut session = Session::new(Box::new(provider), listed.value, config, width, height);
    if let Some(e) = listed.close_failure {
        warn!(command = e.command(), error = %e, "list stream did not close cleanly");
        session.status.set(Severity::Info, e.reason(), Instant::now());
    }
    ui::run(session).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = TuiConfig::default();

    let log_dir = args.resolved_log_dir();
    let guard = match setup_logger(&log_dir, &args.log_level) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("lazypm: {e}");
            process::exit(EXIT_ERROR);
        }
    };
    install_shutdown_hook();
    info!(version = env!("CARGO_PKG_VERSION"), "lazypm starting");

    let code = match start(&args, config).await {
        Ok(()) => EXIT_OK,
        Err(e) => {
            error!(error = %e, "lazypm stopped");
            eprintln!("lazypm: {e}");
            e.exit_code()
        }
    };

    // flush the log writer before exiting
    drop(guard);
    process::exit(code);
}
