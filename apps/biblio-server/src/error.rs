//! Error types for the Biblio server.

use biblio_lending::{LendingError, LendingStatus};
use biblio_store::StoreError;
use tonic::{Code, Status};

use crate::config::ConfigError;

/// Server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Lending(#[from] LendingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// gRPC code for a lending failure category.
pub fn status_code(status: LendingStatus) -> Code {
    match status {
        LendingStatus::InvalidInput => Code::InvalidArgument,
        LendingStatus::NotFound => Code::NotFound,
        LendingStatus::NoCapacity | LendingStatus::NothingToReturn => Code::FailedPrecondition,
        LendingStatus::Internal => Code::Internal,
    }
}

impl From<ServerError> for Status {
    fn from(error: ServerError) -> Self {
        match error {
            ServerError::Lending(err) => Status::new(status_code(err.status()), err.message()),
            other => Status::internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lending_errors_map_to_codes() {
        let status = Status::from(ServerError::from(LendingError::EmptyTitle));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "Title cannot be empty.");

        let status = Status::from(ServerError::from(LendingError::IsbnNotFound {
            isbn: "0000000000000".into(),
        }));
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "No book exists with that ISBN.");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(status_code(LendingStatus::NoCapacity), Code::FailedPrecondition);
        assert_eq!(status_code(LendingStatus::NothingToReturn), Code::FailedPrecondition);
        assert_eq!(status_code(LendingStatus::Internal), Code::Internal);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let status = Status::from(ServerError::from(ConfigError::InvalidValue(
            "BIBLIO_PORT".into(),
        )));
        assert_eq!(status.code(), Code::Internal);
    }
}
