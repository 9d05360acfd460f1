use crate::application::likes::dto::{LikeStatusResponse, ToggleLikeResponse};
use crate::domain::{like::subject::SubjectKind, video::entity::LikedVideo};
use crate::presentation::http::{
    errors::AppError, middleware::user::current_user_id, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

/// Path segment naming a subject kind; accepts the short toggle-route forms too.
fn parse_kind_segment(segment: &str) -> Result<SubjectKind, AppError> {
    match segment {
        "v" => Ok(SubjectKind::Video),
        "c" => Ok(SubjectKind::Comment),
        "t" => Ok(SubjectKind::Tweet),
        other => Ok(other.parse::<SubjectKind>()?),
    }
}

pub async fn toggle_video_like(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ToggleLikeResponse>, AppError> {
    let user_id = current_user_id(&headers, &state.config.jwt_secret)?;
    let liked = state.likes.toggle_video_like(&video_id, user_id).await?;
    Ok(Json(ToggleLikeResponse::new(liked, "Liked status updated")))
}

pub async fn toggle_comment_like(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ToggleLikeResponse>, AppError> {
    let user_id = current_user_id(&headers, &state.config.jwt_secret)?;
    let liked = state.likes.toggle_comment_like(&comment_id, user_id).await?;
    Ok(Json(ToggleLikeResponse::new(
        liked,
        "Liked comment status updated",
    )))
}

pub async fn toggle_tweet_like(
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ToggleLikeResponse>, AppError> {
    let user_id = current_user_id(&headers, &state.config.jwt_secret)?;
    let liked = state.likes.toggle_tweet_like(&tweet_id, user_id).await?;
    Ok(Json(ToggleLikeResponse::new(
        liked,
        "Liked tweet status updated",
    )))
}

pub async fn get_liked_videos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<LikedVideo>>, AppError> {
    let user_id = current_user_id(&headers, &state.config.jwt_secret)?;
    let videos = state.likes.get_liked_videos(user_id).await?;
    Ok(Json(videos))
}

pub async fn get_like_status(
    State(state): State<AppState>,
    Path((kind, subject_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<LikeStatusResponse>, AppError> {
    let user_id = current_user_id(&headers, &state.config.jwt_secret)?;
    let kind = parse_kind_segment(&kind)?;
    let liked = state.likes.is_liked(kind, &subject_id, user_id).await?;
    Ok(Json(LikeStatusResponse {
        liked: liked.is_liked(),
    }))
}
