use super::{errors::DomainError, subject::SubjectKind};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    static ref SUBJECT_ID_REGEX: regex::Regex = regex::Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
}

/// Raw subject identifier as received from the caller, in hyphenated UUID form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubjectId {
    #[validate(regex(path = *SUBJECT_ID_REGEX))]
    pub value: String,
}

impl SubjectId {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let id = Self { value };
        id.validate()?;
        Ok(id)
    }

    pub fn to_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.value).ok()
    }
}

/// Parses a subject id, naming the subject kind in the error.
pub fn parse_subject_id(kind: SubjectKind, raw: &str) -> Result<Uuid, DomainError> {
    SubjectId::new(raw.to_string())
        .ok()
        .and_then(|id| id.to_uuid())
        .ok_or_else(|| DomainError::ValidationError(format!("invalid {} id", kind)))
}
