//! Type definitions for powerstat

pub mod battery;
pub mod error;
pub mod state;

pub use battery::Battery;
pub use error::{Error, Result};
pub use state::State;
