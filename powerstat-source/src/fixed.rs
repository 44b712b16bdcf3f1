//! Source backed by a fixed snapshot

use powerstat_core::{Battery, PartialError, RawReading, SourceError};

use crate::{error::Error, Source};

/// Source that replays a fixed set of readings
///
/// Useful for tests and for hosts where readings come from elsewhere.
///
/// # Examples
///
/// ```
/// use powerstat_core::{Battery, SourceError};
/// use powerstat_source::{FixedSource, Source};
///
/// let source = FixedSource::new("snapshot")
///     .with_battery(Battery::default())
///     .with_failure(SourceError::msg("device gone"));
///
/// assert_eq!(source.count().unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSource {
    name: String,
    readings: Vec<RawReading>,
    enumeration_error: Option<SourceError>,
}

impl FixedSource {
    /// Create an empty source
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readings: Vec::new(),
            enumeration_error: None,
        }
    }

    /// Append a fully read battery
    pub fn with_battery(self, battery: Battery) -> Self {
        self.with_reading(RawReading::Complete(battery))
    }

    /// Append a battery with some unreadable fields
    pub fn with_partial(self, battery: Battery, err: PartialError) -> Self {
        self.with_reading(RawReading::Partial(battery, err))
    }

    /// Append a battery that cannot be read
    pub fn with_failure(self, err: impl Into<SourceError>) -> Self {
        self.with_reading(RawReading::Failed(err.into()))
    }

    /// Append a raw reading
    pub fn with_reading(mut self, reading: RawReading) -> Self {
        self.readings.push(reading);
        self
    }

    /// Make enumeration fail
    ///
    /// Individual batteries can still be read by index.
    pub fn with_enumeration_failure(mut self, err: impl Into<SourceError>) -> Self {
        self.enumeration_error = Some(err.into());
        self
    }
}

impl Source for FixedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn count(&self) -> Result<usize, SourceError> {
        match &self.enumeration_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.readings.len()),
        }
    }

    fn read(&self, index: usize) -> RawReading {
        self.readings
            .get(index)
            .cloned()
            .unwrap_or_else(|| RawReading::Failed(Error::NotFound(index).into()))
    }
}
