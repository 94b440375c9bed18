//to run cargo run --bin cli -- --url http://127.0.0.1:8000
mod worker;

use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tokio::signal;

#[derive(Debug, Parser)]
#[command(name = "cli", about = "Keeps a pool of workers polling the load engine")]
struct ClientArgs {
    /// Endpoint every worker hits.
    #[arg(long, env = "LOAD_TARGET_URL", default_value = "http://127.0.0.1:55833")]
    url: String,

    /// Size of the worker pool; fixed for the whole run.
    #[arg(long, env = "LOAD_WORKERS", default_value_t = 30,
          value_parser = clap::value_parser!(u16).range(1..))]
    workers: u16,

    /// Pause between two requests of the same worker.
    #[arg(long, env = "LOAD_PAUSE_MS", default_value_t = 100)]
    pause_ms: u64,

    /// Per-request timeout. A timed out request prints the failure line.
    #[arg(long, env = "LOAD_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

/// Resolves with the name of the first stop signal delivered to the process.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for Ctrl+C");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                "SIGTERM"
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending().await
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cpu_load::telemetry::init_tracing("info,reqwest=warn");

    let args = ClientArgs::parse();

    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;

    tracing::info!(
        url = %args.url,
        workers = args.workers,
        pause_ms = args.pause_ms,
        "starting load workers, stop with Ctrl+C or kill {}",
        std::process::id()
    );

    let mut workers = worker::spawn_workers(
        usize::from(args.workers),
        client,
        &args.url,
        Duration::from_millis(args.pause_ms),
    );

    // Workers never finish on their own; the only way out is a signal or a panic.
    tokio::select! {
        name = shutdown_signal() => tracing::info!(signal = name, "stopping workers"),
        Some(joined) = workers.join_next() => {
            if let Err(err) = joined {
                tracing::error!(error = %err, "worker died");
            }
        }
        else => {}
    }

    workers.shutdown().await;
    Ok(())
}
