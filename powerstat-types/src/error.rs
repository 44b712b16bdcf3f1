pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Status label that does not name any known state
    #[error("Invalid state `{0}`")]
    InvalidState(String),
}
