//! Per-field errors

use std::fmt;

use crate::error::SourceError;

/// A battery field that is read independently of the others
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    State,
    Current,
    Full,
    Design,
    ChargeRate,
    Voltage,
    DesignVoltage,
}

impl Field {
    /// All fields, in the order they are reported
    pub const ALL: [Field; 7] = [
        Field::State,
        Field::Current,
        Field::Full,
        Field::Design,
        Field::ChargeRate,
        Field::Voltage,
        Field::DesignVoltage,
    ];

    /// Name used when rendering a [`PartialError`]
    pub fn name(&self) -> &'static str {
        match self {
            Field::State => "State",
            Field::Current => "Current",
            Field::Full => "Full",
            Field::Design => "Design",
            Field::ChargeRate => "ChargeRate",
            Field::Voltage => "Voltage",
            Field::DesignVoltage => "DesignVoltage",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors for the individual fields of one battery
///
/// Each [`Field`] has its own slot. Fields whose slot is empty were read
/// successfully.
///
/// # Examples
///
/// ```
/// use powerstat_core::{Field, PartialError, SourceError};
///
/// let err = PartialError::new()
///     .with(Field::State, SourceError::msg("t2"))
///     .with(Field::Full, SourceError::msg("t3"));
///
/// assert!(err.is_failed(Field::Full));
/// assert_eq!(err.to_string(), "{State:t2 Full:t3}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialError {
    slots: [Option<SourceError>; 7],
}

impl PartialError {
    /// Create an error with no failed fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error for `field`
    pub fn with(mut self, field: Field, err: impl Into<SourceError>) -> Self {
        self.slots[field.index()] = Some(err.into());
        self
    }

    /// Error recorded for `field`, if it failed
    pub fn get(&self, field: Field) -> Option<&SourceError> {
        self.slots[field.index()].as_ref()
    }

    /// Check if `field` failed
    pub fn is_failed(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Failed fields with their errors, in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &SourceError)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|err| (field, err)))
    }

    /// Number of failed fields
    pub fn failed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no field failed
    pub fn all_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check if every field failed
    pub fn all_present(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl FromIterator<(Field, SourceError)> for PartialError {
    fn from_iter<I: IntoIterator<Item = (Field, SourceError)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |partial, (field, err)| partial.with(field, err))
    }
}

impl fmt::Display for PartialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, err)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", field, err)?;
        }
        f.write_str("}")
    }
}

impl std::error::Error for PartialError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn msg(s: &str) -> SourceError {
        SourceError::msg(s)
    }

    fn every_field() -> PartialError {
        Field::ALL
            .into_iter()
            .enumerate()
            .map(|(i, field)| (field, msg(&format!("t{}", i + 4))))
            .collect()
    }

    #[test]
    fn test_empty() {
        let err = PartialError::new();

        assert_eq!(err.to_string(), "{}");
        assert!(err.all_empty());
        assert!(!err.all_present());
        assert_eq!(err.failed_count(), 0);
    }

    #[test]
    fn test_single_field() {
        let err = PartialError::new().with(Field::Full, msg("t1"));

        assert_eq!(err.to_string(), "{Full:t1}");
        assert!(!err.all_empty());
        assert!(!err.all_present());
        assert!(err.is_failed(Field::Full));
        assert!(!err.is_failed(Field::Current));
    }

    #[test]
    fn test_render_follows_field_order() {
        // Insertion order does not matter
        let err = PartialError::new()
            .with(Field::Full, msg("t3"))
            .with(Field::State, msg("t2"));

        assert_eq!(err.to_string(), "{State:t2 Full:t3}");
    }

    #[test]
    fn test_every_field() {
        let err = every_field();

        assert_eq!(
            err.to_string(),
            "{State:t4 Current:t5 Full:t6 Design:t7 ChargeRate:t8 Voltage:t9 DesignVoltage:t10}"
        );
        assert!(!err.all_empty());
        assert!(err.all_present());
        assert_eq!(err.failed_count(), 7);
    }

    #[test]
    fn test_message_is_not_escaped() {
        let err = PartialError::new().with(Field::Voltage, msg("a b:{c}"));
        assert_eq!(err.to_string(), "{Voltage:a b:{c}}");
    }

    #[test]
    fn test_get() {
        let err = PartialError::new().with(Field::ChargeRate, msg("no rate"));

        assert_eq!(err.get(Field::ChargeRate), Some(&msg("no rate")));
        assert_eq!(err.get(Field::DesignVoltage), None);
    }

    #[test]
    fn test_iter_yields_failed_fields_only() {
        let err = PartialError::new()
            .with(Field::DesignVoltage, msg("x"))
            .with(Field::Current, msg("y"));

        let fields: Vec<Field> = err.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Current, Field::DesignVoltage]);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = PartialError::new().with(Field::State, msg("t1"));
        let b = PartialError::new().with(Field::State, msg("t1"));
        let c = PartialError::new().with(Field::State, msg("t2"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
