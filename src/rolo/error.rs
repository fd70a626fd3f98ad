use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("{0} - incorrect phone number")]
    InvalidPhone(String),

    #[error("{0} - incorrect date")]
    InvalidBirthday(String),

    #[error("{0} - incorrect email")]
    InvalidEmail(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Note {0} cannot be empty")]
    EmptyNote(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
