use super::helpers::{
    assert_status, liked_videos, read_json, send, seed_user, seed_video, spawn_app, toggle,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::time::{Duration, sleep};
use uuid::Uuid;

#[tokio::test]
async fn user_without_likes_gets_empty_list() {
    let app = spawn_app();
    let videos = liked_videos(&app.app, Uuid::now_v7()).await;
    assert!(videos.is_empty());
}

#[tokio::test]
async fn liked_videos_are_most_recent_first() {
    let app = spawn_app();
    let owner = seed_user(&app.store, "creator");
    let viewer = Uuid::now_v7();
    let a = seed_video(&app.store, owner, "A");
    let b = seed_video(&app.store, owner, "B");
    let c = seed_video(&app.store, owner, "C");

    for video_id in [a, b, c] {
        toggle(&app.app, "v", &video_id.to_string(), viewer).await;
        sleep(Duration::from_millis(5)).await;
    }

    let videos = liked_videos(&app.app, viewer).await;
    let titles: Vec<&str> = videos
        .iter()
        .map(|v| v["video"]["title"].as_str().expect("missing title"))
        .collect();
    assert_eq!(titles, vec!["C", "B", "A"]);

    let liked_at: Vec<DateTime<Utc>> = videos
        .iter()
        .map(|v| {
            v["liked_at"]
                .as_str()
                .expect("missing liked_at")
                .parse()
                .expect("liked_at should be RFC 3339")
        })
        .collect();
    assert!(liked_at.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn owner_summary_exposes_only_public_fields() {
    let app = spawn_app();
    let owner = seed_user(&app.store, "maker");
    let viewer = Uuid::now_v7();
    let video_id = seed_video(&app.store, owner, "Tutorial");
    toggle(&app.app, "v", &video_id.to_string(), viewer).await;

    let videos = liked_videos(&app.app, viewer).await;
    assert_eq!(videos.len(), 1);

    let owner_json = videos[0]["video"]["owner"]
        .as_object()
        .expect("owner should be embedded");
    let mut keys: Vec<&str> = owner_json.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["avatar", "full_name", "username"]);
    assert_eq!(owner_json["username"], "maker");

    let raw = serde_json::to_string(&videos).unwrap();
    assert!(!raw.contains("secrethash"));
    assert!(!raw.contains("maker@example.com"));
}

#[tokio::test]
async fn likes_on_deleted_videos_are_dropped() {
    let app = spawn_app();
    let owner = seed_user(&app.store, "uploader");
    let viewer = Uuid::now_v7();
    let kept = seed_video(&app.store, owner, "Kept");
    let removed = seed_video(&app.store, owner, "Removed");
    let never_existed = Uuid::now_v7();

    toggle(&app.app, "v", &kept.to_string(), viewer).await;
    toggle(&app.app, "v", &removed.to_string(), viewer).await;
    toggle(&app.app, "v", &never_existed.to_string(), viewer).await;
    app.store.remove_video(removed);

    let videos = liked_videos(&app.app, viewer).await;
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["video"]["id"], kept.to_string());
}

#[tokio::test]
async fn missing_owner_leaves_owner_empty() {
    let app = spawn_app();
    let viewer = Uuid::now_v7();
    let video_id = seed_video(&app.store, Uuid::now_v7(), "Orphaned owner");
    toggle(&app.app, "v", &video_id.to_string(), viewer).await;

    let videos = liked_videos(&app.app, viewer).await;
    assert_eq!(videos.len(), 1);
    assert!(videos[0]["video"]["owner"].is_null());
}

#[tokio::test]
async fn comment_and_tweet_likes_never_appear() {
    let app = spawn_app();
    let owner = seed_user(&app.store, "host");
    let viewer = Uuid::now_v7();
    let video_id = seed_video(&app.store, owner, "Clip");
    let comment_id = Uuid::now_v7();

    assert!(toggle(&app.app, "v", &video_id.to_string(), viewer).await);
    assert!(toggle(&app.app, "c", &comment_id.to_string(), viewer).await);
    // Same id liked as a tweet must not resolve to the video.
    assert!(toggle(&app.app, "t", &video_id.to_string(), viewer).await);

    let videos = liked_videos(&app.app, viewer).await;
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["video"]["id"], video_id.to_string());

    assert!(!toggle(&app.app, "v", &video_id.to_string(), viewer).await);
    assert!(liked_videos(&app.app, viewer).await.is_empty());
    assert_eq!(app.store.like_count(), 2);
}

#[tokio::test]
async fn liked_videos_are_private_to_the_caller() {
    let app = spawn_app();
    let owner = seed_user(&app.store, "streamer");
    let alice = Uuid::now_v7();
    let bob = Uuid::now_v7();
    let video_id = seed_video(&app.store, owner, "Live");
    toggle(&app.app, "v", &video_id.to_string(), alice).await;

    assert_eq!(liked_videos(&app.app, alice).await.len(), 1);
    assert!(liked_videos(&app.app, bob).await.is_empty());
}

#[tokio::test]
async fn liked_videos_without_token_is_unauthorized() {
    let app = spawn_app();
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/likes/videos")
        .header("authorization", "Bearer not-a-jwt")
        .body(Body::empty())
        .expect("failed to build request");

    let res = send(&app.app, req).await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Unauthorized");
}
