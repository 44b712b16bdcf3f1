//! Closure-backed source

use std::fmt;

use powerstat_core::{RawBatch, RawReading, SourceError};

use crate::Source;

/// Source built from two closures
///
/// `read` answers reads of a single battery; `read_all` answers reads of
/// every battery. The battery count is taken from `read_all`.
///
/// # Examples
///
/// ```
/// use powerstat_core::{Battery, RawBatch, RawReading};
/// use powerstat_source::{FnSource, Source};
///
/// let source = FnSource::new(
///     |_| RawReading::Complete(Battery::default()),
///     || RawBatch::Complete(vec![Battery::default()]),
/// );
///
/// assert_eq!(source.count().unwrap(), 1);
/// ```
pub struct FnSource<R, A> {
    name: String,
    read: R,
    read_all: A,
}

impl<R, A> FnSource<R, A>
where
    R: Fn(usize) -> RawReading + Send + Sync,
    A: Fn() -> RawBatch + Send + Sync,
{
    pub fn new(read: R, read_all: A) -> Self {
        Self {
            name: "fn".to_string(),
            read,
            read_all,
        }
    }

    /// Set the label used in log output
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<R, A> Source for FnSource<R, A>
where
    R: Fn(usize) -> RawReading + Send + Sync,
    A: Fn() -> RawBatch + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn count(&self) -> Result<usize, SourceError> {
        match (self.read_all)() {
            RawBatch::Complete(batteries) => Ok(batteries.len()),
            RawBatch::PerDevice(slots) => Ok(slots.len()),
            RawBatch::Failed(err) => Err(err),
        }
    }

    fn read(&self, index: usize) -> RawReading {
        (self.read)(index)
    }

    fn read_all(&self) -> RawBatch {
        (self.read_all)()
    }
}

impl<R, A> fmt::Debug for FnSource<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerstat_core::{Battery, PartialError, ReadError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_forwards_index() {
        let source = FnSource::new(
            |index| RawReading::Complete(Battery { full: index as f64, ..Default::default() }),
            || RawBatch::Complete(vec![]),
        );

        assert_eq!(
            source.read(7),
            RawReading::Complete(Battery { full: 7.0, ..Default::default() })
        );
    }

    #[test]
    fn test_count_follows_read_all() {
        let source = FnSource::new(
            |_| RawReading::Failed(SourceError::msg("unused")),
            || {
                RawBatch::PerDevice(vec![
                    (Battery::default(), None),
                    (Battery::default(), Some(ReadError::Partial(PartialError::new()))),
                ])
            },
        );

        assert_eq!(source.count().unwrap(), 2);
    }

    #[test]
    fn test_count_enumeration_failure() {
        let source = FnSource::new(
            |_| RawReading::Failed(SourceError::msg("unused")),
            || RawBatch::Failed(SourceError::msg("t1")),
        );

        assert_eq!(source.count(), Err(SourceError::msg("t1")));
    }

    #[test]
    fn test_name() {
        let source = FnSource::new(
            |_| RawReading::Complete(Battery::default()),
            || RawBatch::Complete(vec![]),
        )
        .with_name("closures");

        assert_eq!(source.name(), "closures");
        assert_eq!(format!("{:?}", source), "FnSource { name: \"closures\", .. }");
    }
}
