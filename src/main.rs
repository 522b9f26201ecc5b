use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod forms;
mod pacing;
mod responses;
mod retrieval;
mod router;
mod store;
mod submission;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("resource_hub=info")),
        )
        .init();

    // 1️⃣ Load configuration once; handlers receive it through `App`
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Wire the listing collection
    let app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "listing store initialization failed");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = app.config.bind_addr;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
