use axum::{Router, http::HeaderName, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    AppState, handlers,
    middleware::{HttpMakeSpan, HttpOnResponse, X_REQUEST_ID},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/areas", get(handlers::list_areas))
        .route("/api/brands", get(handlers::list_brands))
        .route("/api/compliance-report", get(handlers::compliance_report))
        .route("/api/brand-compliance", get(handlers::brand_compliance))
        .with_state(state)
}

/// The router wrapped in the request-id, tracing and CORS layers.
pub fn create_app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(X_REQUEST_ID);

    create_router(state)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(HttpMakeSpan)
                .on_response(HttpOnResponse),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
