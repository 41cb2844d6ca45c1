use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use neuroscan::config::{CLASS_LABELS, RUST_LOG};
use neuroscan::server::{routes, AppState};
use neuroscan::settings::Settings;
use neuroscan::{Classifier, TorchModel};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", RUST_LOG);
    }
    tracing_subscriber::fmt::init();

    let settings = Settings::load().context("failed to load settings")?;

    // Load the pre-trained model once; it is shared read-only by every
    // request for the lifetime of the process
    let model = TorchModel::load(&settings.model_path)
        .with_context(|| format!("failed to load model from {}", settings.model_path))?;
    let labels = CLASS_LABELS.iter().map(|l| l.to_string()).collect();
    let classifier = Arc::new(Classifier::new(Arc::new(model), labels));

    if let Some(dir) = &settings.upload_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create upload dir {dir}"))?;
    }

    info!(
        "serving {} on port {}",
        settings.model_path, settings.port
    );

    let port = settings.port;
    let state = web::Data::new(AppState {
        classifier,
        settings,
    });

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .service(routes::predict)
            .service(routes::index)
            .service(routes::health)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
