mod apidoc;
mod config;
mod handlers;
mod models;
mod routes;
mod services;
#[cfg(test)]
mod test_support;
mod utils;

use config::Config;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    /// Shared by every request; default timeouts
    pub http: reqwest::Client,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Config::from_env().expect("Failed to load configuration");
    let http = reqwest::Client::new();
    // Compute before moving state anywhere
    let addr = format!("{}:{}", cfg.app_host, cfg.app_port);

    tracing::info!(
        "Using Gemini model {} (frontend origin {:?})",
        cfg.gemini_model,
        cfg.frontend_origin
    );

    let state = AppState { cfg, http };

    let app = routes::router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", apidoc::ApiDoc::openapi()));

    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("English tutor backend listening on http://{addr}");
    axum::serve(listener, app).await.expect("Server error");
}
