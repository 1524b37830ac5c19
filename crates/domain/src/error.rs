use thiserror::Error;

use crate::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
    #[error("category {0} is derived and cannot hold images")]
    SyntheticCategory(Category),
    #[error("image id must not be empty")]
    EmptyImageId,
    #[error("contact field {0} is required")]
    MissingContactField(&'static str),
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
}
