use thiserror::Error;

use crate::date::DateError;
use crate::ladder::LadderError;

#[derive(Debug, Error)]
pub enum TdlcError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ladder: {0}")]
    Ladder(#[from] LadderError),
    #[error("invalid date {value:?}: {source}")]
    Date { value: String, source: DateError },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TdlcError>;
