mod bot;
mod config;
mod data;
mod dispatch;
mod error;
mod handlers;
mod model;
mod registry;
mod service;
mod startup;
mod telemetry;

use std::sync::Arc;

use crate::{
    config::Config, dispatch::Dispatcher, error::AppError, service::analytics::DatabaseAnalytics,
    telemetry::TracingTelemetry,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    // Every handler is registered before the gateway client exists
    let registry = Arc::new(handlers::registry()?);

    let db = startup::connect_to_database(&config).await?;

    let dispatcher = Arc::new(Dispatcher::new(
        registry.clone(),
        Arc::new(TracingTelemetry::new()),
        Arc::new(DatabaseAnalytics::new(db.clone())),
        config.locale,
    ));

    tracing::info!("Starting bot");

    let client = bot::start::init_bot(&config, db, registry, dispatcher).await?;
    bot::start::start_bot(client).await
}
