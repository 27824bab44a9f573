use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::utils::{Method, Status};
use std::{sync::Arc, time::Instant};

pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = Method::from(req.method());
    let start = Instant::now();

    let response = next.run(req).await;

    state.metrics.record(
        method,
        Status::from(response.status()),
        start.elapsed().as_secs_f64(),
    );

    response
}
