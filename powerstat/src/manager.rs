//! High-level battery interface

use std::sync::Arc;

use tracing::{debug, warn};

use powerstat_core::{
    BatchReading, FatalError, Reading, SourceError, reduce_all, reduce_one,
};
use powerstat_source::Source;

use crate::Result;

/// Battery manager
///
/// Reads batteries through a [`Source`] and classifies what it reports.
/// Cheap to clone; clones share the source.
///
/// # Examples
///
/// ```
/// use powerstat::{Battery, FixedSource, Manager};
///
/// let manager = Manager::new(FixedSource::new("snapshot").with_battery(Battery::default()));
///
/// let reading = manager.get(0);
/// assert!(reading.error().is_none());
/// ```
#[derive(Clone)]
pub struct Manager {
    source: Arc<dyn Source>,
}

impl Manager {
    /// Create a manager reading from `source`
    pub fn new(source: impl Source + 'static) -> Self {
        Self::with_shared(Arc::new(source))
    }

    /// Create a manager reading from a shared source
    pub fn with_shared(source: Arc<dyn Source>) -> Self {
        Self { source }
    }

    /// Name of the underlying source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Number of batteries present
    ///
    /// # Errors
    ///
    /// Returns a fatal error if batteries could not be enumerated.
    pub fn count(&self) -> Result<usize> {
        self.source
            .count()
            .map_err(|err| FatalError::new(err).into())
    }

    /// Read the battery at `index`
    pub fn get(&self, index: usize) -> Reading {
        debug!(source = self.source.name(), index, "Reading battery");

        let reading = reduce_one(self.source.read(index));
        log_reading(self.source.name(), index, &reading);

        reading
    }

    /// Read every battery
    pub fn get_all(&self) -> BatchReading {
        debug!(source = self.source.name(), "Reading all batteries");

        let reading = reduce_all(self.source.read_all());
        log_batch(self.source.name(), &reading);

        reading
    }

    /// Read the battery at `index` on the blocking thread pool
    ///
    /// A source that panics yields a fatal reading. This relies on unwinding;
    /// built with `panic = "abort"` (the release profile) the process aborts instead.
    pub async fn fetch(&self, index: usize) -> Reading {
        let source = Arc::clone(&self.source);

        match tokio::task::spawn_blocking(move || source.read(index)).await {
            Ok(raw) => {
                let reading = reduce_one(raw);
                log_reading(self.source.name(), index, &reading);
                reading
            }
            Err(err) => {
                warn!(source = self.source.name(), index, error = %err, "Battery read aborted");
                FatalError::new(SourceError::msg(err.to_string())).into()
            }
        }
    }

    /// Read every battery on the blocking thread pool
    ///
    /// A source that panics yields a fatal reading. This relies on unwinding;
    /// built with `panic = "abort"` (the release profile) the process aborts instead.
    pub async fn fetch_all(&self) -> BatchReading {
        let source = Arc::clone(&self.source);

        match tokio::task::spawn_blocking(move || source.read_all()).await {
            Ok(raw) => {
                let reading = reduce_all(raw);
                log_batch(self.source.name(), &reading);
                reading
            }
            Err(err) => {
                warn!(source = self.source.name(), error = %err, "Battery read aborted");
                FatalError::new(SourceError::msg(err.to_string())).into()
            }
        }
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("source", &self.source.name())
            .finish()
    }
}

fn log_reading(source: &str, index: usize, reading: &Reading) {
    match reading.error() {
        None => debug!(source, index, "Battery read"),
        Some(err) if err.is_fatal() => warn!(source, index, error = %err, "Battery unreadable"),
        Some(err) => debug!(source, index, error = %err, "Battery partially read"),
    }
}

fn log_batch(source: &str, reading: &BatchReading) {
    let count = reading.batteries().map_or(0, <[_]>::len);

    match reading.error() {
        None => debug!(source, count, "Batteries read"),
        Some(err) if err.is_fatal() => warn!(source, error = %err, "Batteries unreadable"),
        Some(err) => debug!(source, count, error = %err, "Batteries partially read"),
    }
}
