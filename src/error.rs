use crate::domain::id::EntityId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TavlaError>;

#[derive(Debug, Error)]
pub enum TavlaError {
    #[error("Entity not found: {0}")]
    NotFound(EntityId),

    #[error("Invalid drag transition: {0}")]
    InvalidTransition(&'static str),

    #[error("Invalid entity ID format: {0}")]
    InvalidEntityId(String),
}
