use aq_core::AqError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] AqError),

    #[error("initial school of {requested} fish exceeds the limit of {limit}")]
    SchoolTooLarge {
        requested: usize,
        limit:     usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
