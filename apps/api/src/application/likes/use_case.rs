use crate::domain::{
    like::{
        entity::{LikeKey, LikeState},
        errors::DomainError,
        repository::LikeRepository,
        subject::SubjectKind,
        value_objects::parse_subject_id,
    },
    video::entity::LikedVideo,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Toggles likes on videos, comments and tweets and reports a user's liked videos.
///
/// Every operation takes the caller's user id explicitly. A toggle is a lookup
/// followed by either a delete or an insert; two concurrent toggles on the same
/// key cannot produce duplicate rows because the store rejects the second insert
/// with [`DomainError::AlreadyExists`], which is then resolved by re-reading the key.
pub struct LikeUseCase {
    repository: Arc<dyn LikeRepository>,
}

impl LikeUseCase {
    pub fn new(repository: Arc<dyn LikeRepository>) -> Self {
        Self { repository }
    }

    pub async fn toggle_video_like(
        &self,
        video_id: &str,
        user_id: Uuid,
    ) -> Result<LikeState, DomainError> {
        self.toggle_like(SubjectKind::Video, video_id, user_id).await
    }

    pub async fn toggle_comment_like(
        &self,
        comment_id: &str,
        user_id: Uuid,
    ) -> Result<LikeState, DomainError> {
        self.toggle_like(SubjectKind::Comment, comment_id, user_id)
            .await
    }

    pub async fn toggle_tweet_like(
        &self,
        tweet_id: &str,
        user_id: Uuid,
    ) -> Result<LikeState, DomainError> {
        self.toggle_like(SubjectKind::Tweet, tweet_id, user_id).await
    }

    /// Flips the like state of `(kind, subject_id)` for `user_id`.
    ///
    /// The returned state is what the store held when this call finished. Under
    /// concurrent toggles on the same key it is best-effort; re-query with
    /// [`LikeUseCase::is_liked`] for an authoritative answer.
    ///
    /// # Errors
    /// - [`DomainError::ValidationError`] for a malformed subject id; storage is untouched.
    /// - [`DomainError::PersistenceError`] when the insert or delete did not take effect.
    /// - [`DomainError::StorageError`] when the initial lookup fails.
    #[instrument(skip(self))]
    pub async fn toggle_like(
        &self,
        kind: SubjectKind,
        subject_id: &str,
        user_id: Uuid,
    ) -> Result<LikeState, DomainError> {
        let key = LikeKey::new(kind, parse_subject_id(kind, subject_id)?, user_id);

        match self.repository.find_one(&key).await? {
            Some(existing) => {
                let removed = self
                    .repository
                    .delete_by_id(existing.id)
                    .await
                    .map_err(|e| {
                        error!(like_id = %existing.id, "Failed to delete like: {}", e);
                        DomainError::PersistenceError("failed to remove like".to_string())
                    })?;
                if !removed {
                    warn!(like_id = %existing.id, "Like vanished before it could be removed");
                    return Err(DomainError::PersistenceError(
                        "failed to remove like".to_string(),
                    ));
                }
                info!(like_id = %existing.id, "Like removed");
                Ok(LikeState::NotLiked)
            }
            None => match self.repository.insert(&key).await {
                Ok(like) => {
                    info!(like_id = %like.id, "Like created");
                    Ok(LikeState::Liked)
                }
                Err(DomainError::AlreadyExists) => {
                    debug!("Concurrent toggle already created this like");
                    // Another toggle may have removed it again since; report what is stored now.
                    match self.repository.exists(&key).await {
                        Ok(liked) => Ok(LikeState::from(liked)),
                        Err(e) => {
                            warn!("Could not re-read like after conflict: {}", e);
                            Ok(LikeState::Liked)
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to create like: {}", e);
                    Err(DomainError::PersistenceError(
                        "failed to create like".to_string(),
                    ))
                }
            },
        }
    }

    /// Current like state of `(kind, subject_id)` for `user_id`.
    #[instrument(skip(self))]
    pub async fn is_liked(
        &self,
        kind: SubjectKind,
        subject_id: &str,
        user_id: Uuid,
    ) -> Result<LikeState, DomainError> {
        let key = LikeKey::new(kind, parse_subject_id(kind, subject_id)?, user_id);
        let liked = self.repository.exists(&key).await?;
        Ok(LikeState::from(liked))
    }

    /// Videos liked by `user_id`, most recently liked first.
    ///
    /// Likes on comments and tweets never appear, nor do likes whose video has
    /// been deleted. An empty list is a normal result.
    #[instrument(skip(self))]
    pub async fn get_liked_videos(&self, user_id: Uuid) -> Result<Vec<LikedVideo>, DomainError> {
        let videos = self
            .repository
            .list_liked_videos_with_owner(user_id)
            .await
            .map_err(|e| match e {
                DomainError::StorageError(msg) => {
                    error!("Failed to load liked videos: {}", msg);
                    DomainError::PersistenceError("failed to fetch liked videos".to_string())
                }
                other => other,
            })?;
        debug!(count = videos.len(), "Loaded liked videos");
        Ok(videos)
    }
}
