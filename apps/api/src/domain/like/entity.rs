use super::subject::{Subject, SubjectKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One user's endorsement of exactly one subject.
///
/// A like is created by toggling on and removed by toggling off; it is never
/// updated in place. At most one like exists per `(subject, user_id)`, which the
/// `likes_subject_user_unique` constraint keeps true under concurrent writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: Subject,
    pub created_at: DateTime<Utc>,
}

/// Lookup key for the single like a user may hold on a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeKey {
    pub subject: Subject,
    pub user_id: Uuid,
}

impl LikeKey {
    pub fn new(kind: SubjectKind, subject_id: Uuid, user_id: Uuid) -> Self {
        Self {
            subject: Subject::new(kind, subject_id),
            user_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LikeState {
    Liked,
    NotLiked,
}

impl LikeState {
    pub fn is_liked(&self) -> bool {
        matches!(self, Self::Liked)
    }
}

impl From<bool> for LikeState {
    fn from(liked: bool) -> Self {
        if liked { Self::Liked } else { Self::NotLiked }
    }
}
