use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub database_reachable: bool,
    pub version: &'static str,
}

/// 200 when the likes table's database answers, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database_reachable = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Database unreachable during health check"))
        .is_ok();

    let code = if database_reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthReport {
            database_reachable,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
