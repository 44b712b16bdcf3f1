//! Battery charging state

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Charging direction reported for a battery
///
/// Platform readers report the state as free-form text; [`State::parse`]
/// maps it onto this closed set.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Unknown,
    Empty,
    Full,
    Charging,
    Discharging,

    /// Plugged in but neither charging nor discharging
    Idle,
}

impl State {
    /// All states, in canonical order
    pub const ALL: [State; 6] = [
        State::Unknown,
        State::Empty,
        State::Full,
        State::Charging,
        State::Discharging,
        State::Idle,
    ];

    /// Canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Unknown => "Unknown",
            State::Empty => "Empty",
            State::Full => "Full",
            State::Charging => "Charging",
            State::Discharging => "Discharging",
            State::Idle => "Idle",
        }
    }

    /// Parse a status label, case-insensitively
    ///
    /// Unrecognized labels yield [`State::Unknown`] together with an error
    /// naming the label as it was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use powerstat_types::State;
    ///
    /// assert_eq!(State::parse("charging"), (State::Charging, None));
    ///
    /// let (state, err) = State::parse("strange");
    /// assert_eq!(state, State::Unknown);
    /// assert_eq!(err.unwrap().to_string(), "Invalid state `strange`");
    /// ```
    pub fn parse(label: &str) -> (Self, Option<Error>) {
        match label.parse() {
            Ok(state) => (state, None),
            Err(err) => (State::Unknown, Some(err)),
        }
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        // sysfs spells the idle state this way
        if label.eq_ignore_ascii_case("Not charging") {
            return Ok(State::Idle);
        }

        State::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| Error::InvalidState(label.to_string()))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
