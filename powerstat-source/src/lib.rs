//! Battery sources for powerstat
//!
//! A [`Source`] stands for a platform reader. It reports raw readings, with
//! whatever failures the platform produced, and leaves their classification
//! to `powerstat-core`.

pub mod error;
pub mod fixed;
pub mod func;

pub use error::Error;
pub use fixed::FixedSource;
pub use func::FnSource;

use powerstat_core::{RawBatch, RawReading, SourceError};
use tracing::{debug, warn};

/// Reader of battery information
pub trait Source: Send + Sync {
    /// Label used in log output
    fn name(&self) -> &str;

    /// Number of batteries present
    fn count(&self) -> Result<usize, SourceError>;

    /// Read the battery at `index`
    fn read(&self, index: usize) -> RawReading;

    /// Read every battery
    ///
    /// Reads indices `0..count()` one at a time. Failed reads leave a zeroed
    /// battery in their slot.
    fn read_all(&self) -> RawBatch {
        let count = match self.count() {
            Ok(count) => count,
            Err(err) => {
                warn!(source = self.name(), error = %err, "Could not enumerate batteries");
                return RawBatch::Failed(err);
            }
        };

        debug!(source = self.name(), count, "Reading batteries");

        (0..count).map(|index| self.read(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerstat_core::{Battery, Field, PartialError, ReadError};
    use pretty_assertions::assert_eq;

    /// Source that fails the voltage field of odd batteries
    struct OddFails {
        count: Result<usize, SourceError>,
    }

    impl Source for OddFails {
        fn name(&self) -> &str {
            "odd-fails"
        }

        fn count(&self) -> Result<usize, SourceError> {
            self.count.clone()
        }

        fn read(&self, index: usize) -> RawReading {
            let battery = Battery { full: index as f64, ..Default::default() };

            if index % 2 == 0 {
                RawReading::Complete(battery)
            } else {
                RawReading::Partial(
                    battery,
                    PartialError::new().with(Field::Voltage, SourceError::msg("no voltage")),
                )
            }
        }
    }

    #[test]
    fn test_default_read_all() {
        let source = OddFails { count: Ok(3) };

        let partial = PartialError::new().with(Field::Voltage, SourceError::msg("no voltage"));
        assert_eq!(
            source.read_all(),
            RawBatch::PerDevice(vec![
                (Battery { full: 0.0, ..Default::default() }, None),
                (Battery { full: 1.0, ..Default::default() }, Some(ReadError::Partial(partial))),
                (Battery { full: 2.0, ..Default::default() }, None),
            ])
        );
    }

    #[test]
    fn test_default_read_all_without_errors() {
        let source = OddFails { count: Ok(1) };

        assert_eq!(
            source.read_all(),
            RawBatch::Complete(vec![Battery { full: 0.0, ..Default::default() }])
        );
    }

    #[test]
    fn test_default_read_all_enumeration_failure() {
        let source = OddFails { count: Err(SourceError::msg("no power_supply class")) };

        assert_eq!(
            source.read_all(),
            RawBatch::Failed(SourceError::msg("no power_supply class"))
        );
    }

    #[test]
    fn test_default_read_all_no_batteries() {
        let source = OddFails { count: Ok(0) };
        assert_eq!(source.read_all(), RawBatch::Complete(vec![]));
    }
}
