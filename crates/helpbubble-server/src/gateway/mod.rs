//! HTTP gateway (Axum) for question answering.
//!
//! This module is primarily used by the `helpbubble` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;
pub mod status;


use axum::{
    Router,
    http::{HeaderName, HeaderValue},
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use helpbubble::config::ANY_ORIGIN;
use helpbubble::reader::AnswerModel;

pub use error::GatewayError;
pub use handler::{ask_handler, contexts_handler, health_handler, test_context_handler};
pub use state::HandlerState;
pub use status::{HELPBUBBLE_STATUS_HEADER, HelpBubbleStatus};

pub fn create_router_with_state<M>(state: HandlerState<M>, allowed_origins: &[String]) -> Router
where
    M: AnswerModel + 'static,
{
    Router::new()
        .route("/ask", post(ask_handler::<M>))
        .route("/test-context", post(test_context_handler::<M>))
        .route("/health", get(health_handler::<M>))
        .route("/contexts", get(contexts_handler::<M>))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// `*` allows any origin without credentials; an explicit list allows credentials.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let expose = [HeaderName::from_static(HELPBUBBLE_STATUS_HEADER)];

    if allowed_origins.iter().any(|origin| origin == ANY_ORIGIN) {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers(expose);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers(expose)
}
