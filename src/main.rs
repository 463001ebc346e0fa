use crate::ai::AiSearchGateway;
use crate::app::App;
use crate::config::AppConfig;
use crate::domain::Catalog;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod ai;
mod app;
mod config;
mod domain;
mod errors;
mod forms;
mod i18n;
mod responses;
mod router;
mod session;
mod share;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::sample() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "sample catalog failed to load");
            std::process::exit(1);
        }
    };
    info!(listings = catalog.len(), "catalog loaded");

    let gateway = match AiSearchGateway::from_config(&cfg.ai) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!(error = %e, "AI gateway could not be built");
            std::process::exit(1);
        }
    };

    let app = App::new(catalog, gateway, cfg.public_url.clone());

    info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server");
    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
