use crate::domain::like::entity::LikeState;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Acknowledgement of a toggle. `liked` is best-effort when the same key is
/// toggled concurrently; the status route is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToggleLikeResponse {
    pub liked: bool,
    pub message: String,
}

impl ToggleLikeResponse {
    pub fn new(state: LikeState, message: impl Into<String>) -> Self {
        Self {
            liked: state.is_liked(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikeStatusResponse {
    pub liked: bool,
}
