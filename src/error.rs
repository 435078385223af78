// The Serialize and Deserialize traits are derived to ensure that Errors can be
// stored in signals and logged as structured values.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("An error occurred: {0}")]
    Generic(String),

    #[error("An error related to the wallet occurred: {0}")]
    Wallet(String),

    #[error("An error related to the swap backend occurred: {0}")]
    Garden(String),
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
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

impl From<garden_client::Error> for Error {
    fn from(error: garden_client::Error) -> Self {
        Error::Garden(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_client_errors_as_garden_errors() {
        let error = Error::from(garden_client::Error::generic("boom"));
        assert_eq!(error, Error::Garden("boom".to_string()));
    }

    #[test]
    fn wallet_errors_name_the_wallet() {
        assert_eq!(
            Error::Wallet("user rejected the request".to_string()).to_string(),
            "An error related to the wallet occurred: user rejected the request"
        );
    }
}
