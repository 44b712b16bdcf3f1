//! Error taxonomy for battery readings

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::partial::PartialError;

/// Opaque failure reported by a platform reader
///
/// Wraps any error type and is cheap to clone. Two source errors are equal
/// when they render the same message.
#[derive(Debug, Clone)]
pub struct SourceError(Arc<dyn StdError + Send + Sync>);

impl SourceError {
    /// Wrap an arbitrary error
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Create an error from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for SourceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl PartialEq for SourceError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.to_string() == other.to_string()
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err)
    }
}

impl From<powerstat_types::Error> for SourceError {
    fn from(err: powerstat_types::Error) -> Self {
        Self::new(err)
    }
}

/// What a [`FatalError`] wraps
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Cause {
    /// Every individually read field failed
    #[error("All fields had not nil errors")]
    AllFieldsFailed,

    /// Failure reported by the platform reader itself
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Cause used whenever a failure of every field is promoted to a fatal error
pub const ALL_FIELDS_FAILED: Cause = Cause::AllFieldsFailed;

/// No usable information for a battery, or for the whole batch
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Could not retrieve battery info: `{0}`")]
pub struct FatalError(#[source] Cause);

impl FatalError {
    pub fn new(cause: impl Into<Cause>) -> Self {
        Self(cause.into())
    }

    /// Fatal error wrapping [`ALL_FIELDS_FAILED`]
    pub fn all_fields_failed() -> Self {
        Self(ALL_FIELDS_FAILED)
    }

    pub fn cause(&self) -> &Cause {
        &self.0
    }

    /// Check if this error was promoted from a failure of every field
    pub fn is_all_fields_failed(&self) -> bool {
        self.0 == ALL_FIELDS_FAILED
    }
}

/// Outcome of reading one battery within a batch
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeviceError {
    #[error(transparent)]
    Partial(#[from] PartialError),

    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl DeviceError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

/// Per-battery errors of a batch read
///
/// Index-aligned with the batteries it accompanies. An empty slot means the
/// battery at that index was read without errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors(Vec<Option<DeviceError>>);

impl Errors {
    pub fn new(slots: Vec<Option<DeviceError>>) -> Self {
        Self(slots)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Error for the battery at `index`
    ///
    /// Returns `None` both for a clean slot and for an index out of range.
    pub fn get(&self, index: usize) -> Option<&DeviceError> {
        self.0.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<DeviceError>> {
        self.0.iter()
    }

    /// Check if every slot is clean (vacuously true when empty)
    pub fn all_clean(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Check if every slot holds a fatal error (vacuously true when empty)
    pub fn all_fatal(&self) -> bool {
        self.0
            .iter()
            .all(|slot| slot.as_ref().is_some_and(DeviceError::is_fatal))
    }

    pub fn into_inner(self) -> Vec<Option<DeviceError>> {
        self.0
    }
}

impl From<Vec<Option<DeviceError>>> for Errors {
    fn from(slots: Vec<Option<DeviceError>>) -> Self {
        Self(slots)
    }
}

impl FromIterator<Option<DeviceError>> for Errors {
    fn from_iter<I: IntoIterator<Item = Option<DeviceError>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Errors {
    type Item = Option<DeviceError>;
    type IntoIter = std::vec::IntoIter<Option<DeviceError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Clean slots render as empty strings but still take a separator
        f.write_str("[")?;
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if let Some(err) = slot {
                write!(f, "{}", err)?;
            }
        }
        f.write_str("]")
    }
}

impl StdError for Errors {}

/// Error returned alongside battery readings
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Nothing usable was read
    #[error(transparent)]
    Fatal(#[from] FatalError),

    /// Some fields of a single battery failed
    #[error(transparent)]
    Partial(#[from] PartialError),

    /// Mixed per-battery outcomes of a batch read
    #[error(transparent)]
    Batch(#[from] Errors),
}

impl Error {
    /// Check if no data accompanies this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    pub fn as_fatal(&self) -> Option<&FatalError> {
        match self {
            Self::Fatal(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_partial(&self) -> Option<&PartialError> {
        match self {
            Self::Partial(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_batch(&self) -> Option<&Errors> {
        match self {
            Self::Batch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DeviceError> for Error {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::Partial(err) => Self::Partial(err),
            DeviceError::Fatal(err) => Self::Fatal(err),
        }
    }
}
