//! Unreduced output of platform readers

use powerstat_types::Battery;

use crate::error::SourceError;
use crate::partial::PartialError;

/// What a platform reader returns for one battery
#[derive(Debug, Clone, PartialEq)]
pub enum RawReading {
    /// Every field was read
    Complete(Battery),

    /// Some fields could not be read; they are zeroed in the battery
    Partial(Battery, PartialError),

    /// The battery could not be read at all
    Failed(SourceError),
}

impl RawReading {
    /// Split into a battery and the error it came with
    ///
    /// A failed reading yields a zeroed battery.
    pub fn into_parts(self) -> (Battery, Option<ReadError>) {
        match self {
            Self::Complete(battery) => (battery, None),
            Self::Partial(battery, err) => (battery, Some(ReadError::Partial(err))),
            Self::Failed(err) => (Battery::default(), Some(ReadError::Other(err))),
        }
    }
}

/// Error a platform reader reports for one battery of a batch
#[derive(Debug, Clone, PartialEq)]
pub enum ReadError {
    Partial(PartialError),
    Other(SourceError),
}

impl From<PartialError> for ReadError {
    fn from(err: PartialError) -> Self {
        Self::Partial(err)
    }
}

impl From<SourceError> for ReadError {
    fn from(err: SourceError) -> Self {
        Self::Other(err)
    }
}

/// What a platform reader returns for all batteries
#[derive(Debug, Clone, PartialEq)]
pub enum RawBatch {
    /// Every battery was read without errors
    Complete(Vec<Battery>),

    /// Each battery paired with the error reading it, if any
    PerDevice(Vec<(Battery, Option<ReadError>)>),

    /// Batteries could not be enumerated
    Failed(SourceError),
}

impl FromIterator<RawReading> for RawBatch {
    /// Collect per-battery readings, in index order
    fn from_iter<I: IntoIterator<Item = RawReading>>(iter: I) -> Self {
        let slots: Vec<(Battery, Option<ReadError>)> =
            iter.into_iter().map(RawReading::into_parts).collect();

        if slots.iter().all(|(_, err)| err.is_none()) {
            Self::Complete(slots.into_iter().map(|(battery, _)| battery).collect())
        } else {
            Self::PerDevice(slots)
        }
    }
}
