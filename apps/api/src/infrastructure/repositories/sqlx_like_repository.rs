use crate::domain::{
    like::{
        entity::{Like, LikeKey},
        errors::DomainError,
        repository::LikeRepository,
        subject::{Subject, SubjectKind},
    },
    video::entity::{LikedVideo, OwnerSummary, VideoSummary},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const LIKE_COLUMNS: &str = "id, user_id, subject_kind, subject_id, created_at";

pub struct SqlxLikeRepository {
    pub pool: PgPool,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LikeRow {
    id: Uuid,
    user_id: Uuid,
    subject_kind: String,
    subject_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<LikeRow> for Like {
    type Error = DomainError;

    fn try_from(row: LikeRow) -> Result<Self, Self::Error> {
        let kind = row
            .subject_kind
            .parse::<SubjectKind>()
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        Ok(Like {
            id: row.id,
            user_id: row.user_id,
            subject: Subject::new(kind, row.subject_id),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct LikedVideoRow {
    liked_at: DateTime<Utc>,
    video_id: Uuid,
    title: String,
    description: String,
    video_file: String,
    thumbnail: String,
    duration: f64,
    views: i64,
    is_published: bool,
    video_created_at: DateTime<Utc>,
    owner_id: Option<Uuid>,
    owner_full_name: Option<String>,
    owner_username: Option<String>,
    owner_avatar: Option<String>,
}

impl From<LikedVideoRow> for LikedVideo {
    fn from(row: LikedVideoRow) -> Self {
        let owner = row.owner_id.map(|_| OwnerSummary {
            full_name: row.owner_full_name.unwrap_or_default(),
            username: row.owner_username.unwrap_or_default(),
            avatar: row.owner_avatar.unwrap_or_default(),
        });
        LikedVideo {
            video: VideoSummary {
                id: row.video_id,
                title: row.title,
                description: row.description,
                video_file: row.video_file,
                thumbnail: row.thumbnail,
                duration: row.duration,
                views: row.views,
                is_published: row.is_published,
                created_at: row.video_created_at,
                owner,
            },
            liked_at: row.liked_at,
        }
    }
}

fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::StorageError(e.to_string())
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    async fn find_one(&self, key: &LikeKey) -> Result<Option<Like>, DomainError> {
        let row = sqlx::query_as::<_, LikeRow>(&format!(
            "SELECT {LIKE_COLUMNS} FROM likes \
             WHERE subject_kind = $1 AND subject_id = $2 AND user_id = $3"
        ))
        .bind(key.subject.kind.as_str())
        .bind(key.subject.id)
        .bind(key.user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;
        row.map(Like::try_from).transpose()
    }

    async fn insert(&self, key: &LikeKey) -> Result<Like, DomainError> {
        let row = sqlx::query_as::<_, LikeRow>(&format!(
            "INSERT INTO likes (id, user_id, subject_kind, subject_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {LIKE_COLUMNS}"
        ))
        .bind(Uuid::now_v7())
        .bind(key.user_id)
        .bind(key.subject.kind.as_str())
        .bind(key.subject.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DomainError::AlreadyExists
            }
            other => storage_error(other),
        })?;
        Like::try_from(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM likes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, key: &LikeKey) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM likes WHERE subject_kind = $1 AND subject_id = $2 AND user_id = $3)"#,
        )
        .bind(key.subject.kind.as_str())
        .bind(key.subject.id)
        .bind(key.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(exists)
    }

    async fn list_liked_videos_with_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<LikedVideo>, DomainError> {
        // Inner join on videos drops likes whose video was deleted; the owner
        // join is outer so a missing account only blanks the owner.
        let rows = sqlx::query_as::<_, LikedVideoRow>(
            "SELECT l.created_at AS liked_at, \
                    v.id AS video_id, v.title, v.description, v.video_file, v.thumbnail, \
                    v.duration, v.views, v.is_published, v.created_at AS video_created_at, \
                    u.id AS owner_id, u.full_name AS owner_full_name, \
                    u.username AS owner_username, u.avatar AS owner_avatar \
             FROM likes l \
             JOIN videos v ON v.id = l.subject_id \
             LEFT JOIN users u ON u.id = v.owner_id \
             WHERE l.user_id = $1 AND l.subject_kind = $2 \
             ORDER BY l.created_at DESC, l.id DESC",
        )
        .bind(user_id)
        .bind(SubjectKind::Video.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(rows.into_iter().map(LikedVideo::from).collect())
    }
}
