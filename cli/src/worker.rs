use std::fmt;
use std::io::Write;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::task::JoinSet;

/// Printed for every request that did not yield a JSON body, whatever the cause.
pub const FAILURE_LINE: &str = "Request failed";

/// Why a request failed. Only logged; the console sees `FAILURE_LINE` for all of them.
#[derive(Debug, Error)]
pub enum FetchError {
    // refused, reset, timed out
    #[error("request did not complete: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response body is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// What one request produced, as far as the console is concerned.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Body(Value),
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Body(body) => write!(f, "{}", body),
            Outcome::Failed => f.write_str(FAILURE_LINE),
        }
    }
}

async fn fetch(client: &Client, url: &str) -> Result<Value, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Transport)?;
    response.json::<Value>().await.map_err(FetchError::Decode)
}

/// Issue a single GET. Every kind of failure collapses into `Outcome::Failed`;
/// the cause only shows up in debug logs.
pub async fn hit_server(client: &Client, url: &str) -> Outcome {
    match fetch(client, url).await {
        Ok(body) => Outcome::Body(body),
        Err(err) => {
            tracing::debug!(error = %err, url, "request failed");
            Outcome::Failed
        }
    }
}

/// One hit followed by one console line. Write errors are ignored so a closed
/// stdout cannot take the worker down.
pub async fn iteration<W: Write>(client: &Client, url: &str, out: &mut W) -> Outcome {
    let outcome = hit_server(client, url).await;
    let _ = writeln!(out, "{}", outcome);
    outcome
}

/// Hit `url`, print the outcome to `out`, sleep `pause`, forever.
pub async fn run_worker<W: Write>(
    id: usize,
    client: Client,
    url: String,
    pause: Duration,
    mut out: W,
) {
    tracing::debug!(worker = id, "worker started");
    loop {
        iteration(&client, &url, &mut out).await;
        tokio::time::sleep(pause).await;
    }
}

/// Start `count` independent workers. They share nothing but the client's
/// connection pool.
pub fn spawn_workers(count: usize, client: Client, url: &str, pause: Duration) -> JoinSet<()> {
    let mut workers = JoinSet::new();
    for id in 0..count {
        workers.spawn(run_worker(
            id,
            client.clone(),
            url.to_string(),
            pause,
            std::io::stdout(),
        ));
    }
    workers
}
