//! Reduction of raw readings into the error taxonomy
//!
//! Rules applied to a single battery:
//!
//! ```text
//! no error                    -> battery, no error
//! partial, no field failed    -> battery, no error
//! partial, every field failed -> no battery, Fatal(ALL_FIELDS_FAILED)
//! partial, some fields failed -> battery, Partial (unchanged)
//! opaque error                -> no battery, Fatal(error)
//! ```
//!
//! A batch applies the same rules per slot. A batch whose slots all end up
//! fatal collapses into a single `Fatal(ALL_FIELDS_FAILED)` with no batteries.

use tracing::trace;

use powerstat_types::Battery;

use crate::error::{DeviceError, Error, Errors, FatalError};
use crate::raw::{RawBatch, RawReading, ReadError};

/// Reduced reading of one battery
///
/// The battery is absent exactly when the error is fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    battery: Option<Battery>,
    error: Option<Error>,
}

impl Reading {
    pub fn battery(&self) -> Option<&Battery> {
        self.battery.as_ref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_fatal(&self) -> bool {
        self.error.as_ref().is_some_and(Error::is_fatal)
    }

    pub fn into_parts(self) -> (Option<Battery>, Option<Error>) {
        (self.battery, self.error)
    }
}

impl From<FatalError> for Reading {
    fn from(err: FatalError) -> Self {
        Self {
            battery: None,
            error: Some(err.into()),
        }
    }
}

/// Reduced reading of all batteries
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReading {
    batteries: Option<Vec<Battery>>,
    error: Option<Error>,
}

impl BatchReading {
    /// Batteries in index order, `None` when the whole batch collapsed
    pub fn batteries(&self) -> Option<&[Battery]> {
        self.batteries.as_deref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_fatal(&self) -> bool {
        self.error.as_ref().is_some_and(Error::is_fatal)
    }

    /// Each battery with the error for its slot
    ///
    /// Yields nothing when the batch collapsed.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Battery, Option<&DeviceError>)> {
        let errors = self.error.as_ref().and_then(Error::as_batch);

        self.batteries
            .iter()
            .flatten()
            .enumerate()
            .map(move |(i, battery)| (i, battery, errors.and_then(|errs| errs.get(i))))
    }

    pub fn into_parts(self) -> (Option<Vec<Battery>>, Option<Error>) {
        (self.batteries, self.error)
    }
}

impl From<FatalError> for BatchReading {
    fn from(err: FatalError) -> Self {
        Self {
            batteries: Some(Vec::new()),
            error: Some(err.into()),
        }
    }
}

/// Classify the error reported for one battery
fn classify(err: ReadError) -> Option<DeviceError> {
    match err {
        ReadError::Partial(partial) if partial.all_empty() => None,
        ReadError::Partial(partial) if partial.all_present() => {
            Some(FatalError::all_fields_failed().into())
        }
        ReadError::Partial(partial) => Some(partial.into()),
        ReadError::Other(err) => Some(FatalError::new(err).into()),
    }
}

/// Reduce the reading of a single battery
///
/// # Examples
///
/// ```
/// use powerstat_core::{reduce_one, RawReading, SourceError};
///
/// let reading = reduce_one(RawReading::Failed(SourceError::msg("t1")));
///
/// assert!(reading.battery().is_none());
/// assert_eq!(
///     reading.error().unwrap().to_string(),
///     "Could not retrieve battery info: `t1`"
/// );
/// ```
pub fn reduce_one(raw: RawReading) -> Reading {
    let (battery, err) = raw.into_parts();

    match err.and_then(classify) {
        None => Reading {
            battery: Some(battery),
            error: None,
        },
        Some(DeviceError::Partial(partial)) => Reading {
            battery: Some(battery),
            error: Some(partial.into()),
        },
        Some(DeviceError::Fatal(fatal)) => {
            trace!(error = %fatal, "Discarding battery");
            fatal.into()
        }
    }
}

/// Reduce the reading of every battery
///
/// A batch with no batteries is never collapsed.
pub fn reduce_all(raw: RawBatch) -> BatchReading {
    let slots = match raw {
        RawBatch::Complete(batteries) => {
            return BatchReading {
                batteries: Some(batteries),
                error: None,
            };
        }
        RawBatch::Failed(err) => {
            trace!(error = %err, "Enumeration failed");
            return FatalError::new(err).into();
        }
        RawBatch::PerDevice(slots) => slots,
    };

    let (batteries, errors): (Vec<Battery>, Vec<Option<DeviceError>>) = slots
        .into_iter()
        .map(|(battery, err)| (battery, err.and_then(classify)))
        .unzip();
    let errors = Errors::new(errors);

    if errors.all_clean() {
        return BatchReading {
            batteries: Some(batteries),
            error: None,
        };
    }

    if errors.all_fatal() {
        trace!(count = errors.len(), "Every battery failed, collapsing batch");
        return BatchReading {
            batteries: None,
            error: Some(FatalError::all_fields_failed().into()),
        };
    }

    BatchReading {
        batteries: Some(batteries),
        error: Some(errors.into()),
    }
}
