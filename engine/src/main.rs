use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use engine::{configure, EngineArgs};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    cpu_load::telemetry::init_tracing("info,actix_server=warn");

    let args = EngineArgs::parse();
    let settings = web::Data::new(args.load_settings());

    tracing::info!(
        host = %args.host,
        port = args.port,
        busy_ms = args.busy_ms,
        "starting load engine"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(settings.clone())
            .configure(configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;

    tracing::info!("load engine stopped");
    Ok(())
}
