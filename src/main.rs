pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::portfolio;

use crate::config::AppConfig;
use crate::contact::adapter::outgoing::ContactGatewayHttp;
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::services::SubmitContactService;
use crate::portfolio::adapter::outgoing::PortfolioSourceHttp;
use crate::portfolio::application::ports::incoming::use_cases::LoadPortfolioUseCase;
use crate::portfolio::application::service::LoadPortfolioService;
use crate::shared::api::{custom_form_config, custom_json_config};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub load_portfolio: Arc<dyn LoadPortfolioUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!(
        backend = %config.backend_url,
        load_policy = ?config.load_policy,
        "Configuration loaded"
    );

    // No timeout: the client's defaults apply to every backend call.
    let http_client = reqwest::Client::builder()
        .build()
        .map_err(|e| std::io::Error::other(e))?;

    let portfolio_source = PortfolioSourceHttp::new(http_client.clone(), &config.backend_url);
    let contact_gateway = ContactGatewayHttp::new(http_client, &config.backend_url);

    let state = AppState {
        load_portfolio: Arc::new(LoadPortfolioService::new(
            portfolio_source,
            config.load_policy,
        )),
        submit_contact: Arc::new(SubmitContactService::new(Arc::new(contact_gateway))),
    };

    let server_url = config.server_addr();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_form_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Page
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_home_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_form_handler);
    // JSON
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_json_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
