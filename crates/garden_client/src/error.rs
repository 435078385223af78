use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Wallet is unavailable!")]
    WalletUnavailable,

    #[error("Address error: {0}")]
    Address(String),

    #[error("Orderbook error: {0}")]
    Orderbook(String),

    #[error("{0}")]
    Generic(String),
}

impl Error {
    pub fn generic(value: impl std::fmt::Display) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}
