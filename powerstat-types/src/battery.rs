//! Battery readings

use std::fmt;

use crate::state::State;

/// One battery's readings
///
/// Capacities are in mWh, rates in mW and voltages in V. A reading the
/// platform could not provide is left at `0`; the accompanying error says
/// which fields those are.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Battery {
    /// Charging direction
    pub state: State,

    /// Current capacity
    pub current: f64,

    /// Capacity when last fully charged
    pub full: f64,

    /// Design capacity
    pub design: f64,

    /// Charge or discharge rate, always non-negative
    pub charge_rate: f64,

    /// Present voltage
    pub voltage: f64,

    /// Design voltage
    pub design_voltage: f64,
}

impl fmt::Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Battery[{}, {} / {} mWh (design {}), rate {} mW, {} V (design {})]",
            self.state,
            self.current,
            self.full,
            self.design,
            self.charge_rate,
            self.voltage,
            self.design_voltage
        )
    }
}
