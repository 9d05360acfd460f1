use super::{
    entity::{Like, LikeKey},
    errors::DomainError,
};
use crate::domain::video::entity::LikedVideo;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn find_one(&self, key: &LikeKey) -> Result<Option<Like>, DomainError>;
    /// Fails with [`DomainError::AlreadyExists`] when the key is already liked.
    async fn insert(&self, key: &LikeKey) -> Result<Like, DomainError>;
    /// Returns `false` when no row was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;
    async fn exists(&self, key: &LikeKey) -> Result<bool, DomainError>;
    async fn list_liked_videos_with_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<LikedVideo>, DomainError>;
}
