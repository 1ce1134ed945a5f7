use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod config;
mod domain;
mod errors;
mod filter;
mod responses;
mod router;
mod spreadsheets;
mod templates;
mod views;

#[cfg(test)]
mod tests;

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // 1️⃣ Configuration from the environment
    let config = AppConfig::load();

    // 2️⃣ Client for the orchestra backend
    let client = match ApiClient::new(&config.api) {
        Ok(c) => c,
        Err(e) => {
            error!("❌ API client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind);

    let server = Server::bind(&config.bind).max_workers(config.workers);

    // 4️⃣ Serve requests, passing the backend client into the closure
    let result = server.serve(move |req, _info| match handle(req, &client) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
