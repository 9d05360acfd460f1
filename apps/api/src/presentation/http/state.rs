use crate::{application::likes::use_case::LikeUseCase, config::Config};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub likes: Arc<LikeUseCase>,
}
