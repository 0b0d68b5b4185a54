mod catalog;
mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use crate::catalog::CenterCatalog;
use crate::config::Settings;
use crate::handlers::appointments::AppointmentService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let settings = Settings::from_env()?;

    let catalog = Arc::new(CenterCatalog::new());
    catalog
        .seed_if_empty(&settings.centers_file)
        .await
        .context("failed to seed the center catalog")?;

    let appointments = web::Data::new(AppointmentService::new(catalog.clone()));
    let catalog = web::Data::from(catalog);

    info!(
        "listening on {}:{} with {} centers",
        settings.bind_address,
        settings.port,
        catalog.len()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .app_data(appointments.clone())
            .configure(routes::init)
    })
    .bind((settings.bind_address.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
