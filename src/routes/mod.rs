use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
};
use tower_http::cors::{AllowHeaders, CorsLayer};
use tracing::warn;

use crate::AppState;

pub mod tutor;

/// The `/api` surface with its CORS policy applied.
pub fn router(state: AppState) -> Router {
    let origin = state.cfg.frontend_origin.clone();

    Router::new()
        .route("/api/tutor/converse", post(tutor::converse))
        .layer(cors_layer(origin.clone()))
        // Outermost, so foreign origins never reach CORS handling or the handler
        .layer(middleware::from_fn_with_state(origin, reject_foreign_origin))
        .with_state(state)
}

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // Wildcard headers are not allowed together with credentials; mirroring is the equivalent
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn reject_foreign_origin(
    State(allowed): State<HeaderValue>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        if origin != &allowed && !is_same_origin(origin, req.headers().get(header::HOST)) {
            warn!("Rejected request from origin {:?}", origin);
            return (StatusCode::FORBIDDEN, "Invalid CORS request").into_response();
        }
    }
    next.run(req).await
}

/// A browser calling us from our own pages (e.g. `/docs`) is not a CORS request.
fn is_same_origin(origin: &HeaderValue, host: Option<&HeaderValue>) -> bool {
    let (Ok(origin), Some(Ok(host))) = (origin.to_str(), host.map(|h| h.to_str())) else {
        return false;
    };
    origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .is_some_and(|authority| authority.eq_ignore_ascii_case(host))
}
