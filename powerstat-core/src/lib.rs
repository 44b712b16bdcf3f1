//! # powerstat-core
//!
//! Error classification and result reduction for battery readings.
//!
//! Platform readers fail in many shapes: a single field may be unreadable,
//! one battery may vanish, or enumeration may fail outright. This crate
//! turns whatever a reader reports into a small error taxonomy:
//! - [`FatalError`]: nothing usable for the battery (or the whole batch)
//! - [`PartialError`]: some fields failed, the battery is still meaningful
//! - [`Errors`]: per-battery outcomes of a batch read

pub mod error;
pub mod partial;
pub mod raw;
pub mod reduce;

pub use error::{ALL_FIELDS_FAILED, Cause, DeviceError, Error, Errors, FatalError, SourceError};
pub use partial::{Field, PartialError};
pub use raw::{RawBatch, RawReading, ReadError};
pub use reduce::{BatchReading, Reading, reduce_all, reduce_one};

pub use powerstat_types::{Battery, State};
