//! # powerstat
//!
//! Battery status with a composable model of partial failure.
//!
//! ## Features
//!
//! - Per-field errors that keep whatever could be read
//! - Fatal errors only when nothing usable is left
//! - Per-battery error slots for batch reads
//! - Blocking and async (Tokio) entry points
//!
//! ## Quick Start
//!
//! ```
//! use powerstat::{Battery, Error, FixedSource, Manager, State};
//!
//! let source = FixedSource::new("snapshot").with_battery(Battery {
//!     state: State::Charging,
//!     current: 20.0,
//!     full: 40.0,
//!     ..Default::default()
//! });
//! let manager = Manager::new(source);
//!
//! let reading = manager.get_all();
//! match reading.error() {
//!     Some(Error::Fatal(err)) => eprintln!("{}", err),
//!     _ => {
//!         for (i, battery, err) in reading.rows() {
//!             match err {
//!                 Some(err) => eprintln!("BAT{}: {}", i, err),
//!                 None => println!("BAT{}: {}", i, battery),
//!             }
//!         }
//!     }
//! }
//! ```

pub mod manager;

// Re-exports
pub use manager::Manager;

// Re-export core types
pub use powerstat_core::{
    ALL_FIELDS_FAILED, BatchReading, Cause, DeviceError, Error, Errors, FatalError, Field,
    PartialError, RawBatch, RawReading, ReadError, Reading, SourceError, reduce_all, reduce_one,
};
pub use powerstat_source::{FixedSource, FnSource, Source};
pub use powerstat_types::{Battery, State};

/// Result type alias for powerstat operations
pub type Result<T> = std::result::Result<T, Error>;
