use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatehouseError {
    #[error("Username already exists.")]
    DuplicateUsername,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("Storage unavailable: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<sled::Error> for GatehouseError {
    fn from(err: sled::Error) -> Self {
        GatehouseError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GatehouseError {
    fn from(err: serde_json::Error) -> Self {
        GatehouseError::Serialization(err.to_string())
    }
}
