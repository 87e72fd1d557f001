use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date/time: '{input}'")]
    InvalidInstant { input: String },

    #[error("String table error: {0}")]
    StringTable(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
