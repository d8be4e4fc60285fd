use std::convert::From;
use thiserror::Error;

impl From<CreateValidatorError> for i64 {
    fn from(value: CreateValidatorError) -> i64 {
        match value {
            CreateValidatorError::NoAcceptedKinds => -5,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateValidatorError {
    /// The config does not accept any document kind, so every input would be rejected
    #[error("At least one document kind must be accepted")]
    NoAcceptedKinds,
}
