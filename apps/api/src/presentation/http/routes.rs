use super::{
    handlers::{health, likes},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Likes
        .route(
            "/api/v1/likes/toggle/v/{video_id}",
            post(likes::toggle_video_like),
        )
        .route(
            "/api/v1/likes/toggle/c/{comment_id}",
            post(likes::toggle_comment_like),
        )
        .route(
            "/api/v1/likes/toggle/t/{tweet_id}",
            post(likes::toggle_tweet_like),
        )
        .route("/api/v1/likes/videos", get(likes::get_liked_videos))
        .route(
            "/api/v1/likes/status/{kind}/{subject_id}",
            get(likes::get_like_status),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
