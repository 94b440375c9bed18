use std::time::{Duration, Instant};

use actix_web::{web, HttpResponse, Responder};
use clap::Parser;
use cpu_load::{busy_wait, LoadResponse};

#[derive(Debug, Clone, Parser)]
#[command(name = "engine", about = "HTTP endpoint that burns CPU on every request")]
pub struct EngineArgs {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "LOAD_ENGINE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on.
    #[arg(long, env = "LOAD_ENGINE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Milliseconds each request spins before answering.
    #[arg(long, env = "LOAD_ENGINE_BUSY_MS", default_value_t = 1500)]
    pub busy_ms: u64,
}

impl EngineArgs {
    /// Handler state derived from the command line.
    pub fn load_settings(&self) -> LoadSettings {
        LoadSettings {
            busy: Duration::from_millis(self.busy_ms),
        }
    }
}

/// Shared, read-only handler state.
#[derive(Debug, Clone, Copy)]
pub struct LoadSettings {
    /// Wall-clock time every request keeps a core spinning.
    pub busy: Duration,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            busy: cpu_load::DEFAULT_BUSY_WAIT,
        }
    }
}

// The request itself is never inspected.
async fn generate_load(settings: web::Data<LoadSettings>) -> actix_web::Result<impl Responder> {
    let busy = settings.busy;
    let received = Instant::now();

    let spun = web::block(move || busy_wait(busy)).await?;

    tracing::debug!(
        spun = ?spun,
        total = ?received.elapsed(),
        "load request served"
    );
    Ok(HttpResponse::Ok().json(LoadResponse::generated()))
}

/// Mount the load route; shared by the binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(generate_load));
}
