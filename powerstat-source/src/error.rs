//! Source errors

use powerstat_core::SourceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Battery {0} not found")]
    NotFound(usize),
}

impl From<Error> for SourceError {
    fn from(err: Error) -> Self {
        SourceError::new(err)
    }
}
