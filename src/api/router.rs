use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{booking, class, health, instructor};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Instructor directory
        .route("/api/v1/instructors", get(instructor::list_instructors).post(instructor::create_instructor))
        .route("/api/v1/instructors/{id}", get(instructor::get_instructor).put(instructor::update_instructor).delete(instructor::delete_instructor))
        .route("/api/v1/instructors/{id}/classes", get(instructor::list_instructor_classes))
        .route("/api/v1/instructors/{id}/bookings", get(instructor::list_instructor_bookings))

        // Class catalog
        .route("/api/v1/classes", get(class::list_classes).post(class::create_class))
        .route("/api/v1/classes/{id}", get(class::get_class).put(class::update_class).delete(class::delete_class))
        .route("/api/v1/instruments", get(class::list_instruments))

        // Booking ledger
        .route("/api/v1/bookings", get(booking::list_all_bookings).post(booking::create_booking))
        .route("/api/v1/bookings/{id}", get(booking::get_booking))
        .route("/api/v1/bookings/{id}/cancel", post(booking::cancel_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                }),
        )
        .with_state(state)
}
