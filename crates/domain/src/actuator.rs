//! Actuator — a single on/off output with an adjustable 8-bit intensity.
//!
//! The intensity only carries meaning while the output is on. The
//! [`ActuatorState`] keeps `is_on == false ⇒ intensity == 0` on every
//! mutation and re-asserts it on every read.

use serde::Serialize;

use crate::error::ValidationError;

/// Output intensity in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    /// Zero intensity, the only value allowed while the output is off.
    pub const ZERO: Self = Self(0);
    /// Full intensity.
    pub const MAX: Self = Self(u8::MAX);

    /// Wrap a raw 8-bit value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Access the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Intensity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::IntensityOutOfRange {
                value: i128::from(value),
            })
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated request to change the actuator.
///
/// Both fields are optional; an empty command leaves the state as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuatorCommand {
    pub is_on: Option<bool>,
    pub intensity: Option<Intensity>,
}

impl ActuatorCommand {
    /// Set the power field.
    #[must_use]
    pub fn power(mut self, is_on: bool) -> Self {
        self.is_on = Some(is_on);
        self
    }

    /// Set the intensity field.
    #[must_use]
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Whether the command carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_on.is_none() && self.intensity.is_none()
    }
}

/// Commanded state of the actuator.
///
/// Starts off with zero intensity. Only [`apply`](Self::apply) mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorState {
    is_on: bool,
    intensity: Intensity,
}

impl ActuatorState {
    /// Whether the output is commanded on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Current intensity. Always [`Intensity::ZERO`] while off.
    #[must_use]
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Re-assert the off-means-zero invariant and return a snapshot.
    pub fn normalize(&mut self) -> Self {
        if !self.is_on {
            self.intensity = Intensity::ZERO;
        }
        *self
    }

    /// Apply a validated command and return the resulting state.
    ///
    /// Turning off always zeroes the intensity, even when the same command
    /// carries one. An intensity received while the output is (or becomes)
    /// off is discarded.
    pub fn apply(&mut self, command: ActuatorCommand) -> Self {
        if let Some(is_on) = command.is_on {
            self.is_on = is_on;
            if !is_on {
                self.intensity = Intensity::ZERO;
            }
        }

        if let Some(intensity) = command.intensity
            && self.is_on
        {
            self.intensity = intensity;
        }

        self.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn_on_at(value: u8) -> ActuatorCommand {
        ActuatorCommand::default()
            .power(true)
            .intensity(Intensity::new(value))
    }

    fn holds_invariant(state: &ActuatorState) -> bool {
        state.is_on() || state.intensity() == Intensity::ZERO
    }

    #[test]
    fn should_start_off_with_zero_intensity() {
        let state = ActuatorState::default();
        assert!(!state.is_on());
        assert_eq!(state.intensity(), Intensity::ZERO);
    }

    #[test]
    fn should_turn_on_with_intensity() {
        let mut state = ActuatorState::default();
        let result = state.apply(turn_on_at(100));
        assert!(result.is_on());
        assert_eq!(result.intensity().value(), 100);
        assert_eq!(result, state);
    }

    #[test]
    fn should_zero_intensity_when_turned_off_with_intensity() {
        let mut state = ActuatorState::default();
        state.apply(turn_on_at(50));

        let result = state.apply(
            ActuatorCommand::default()
                .power(false)
                .intensity(Intensity::new(200)),
        );

        assert!(!result.is_on());
        assert_eq!(result.intensity(), Intensity::ZERO);
    }

    #[test]
    fn should_discard_intensity_when_off() {
        let mut state = ActuatorState::default();
        let result = state.apply(ActuatorCommand::default().intensity(Intensity::new(180)));
        assert!(!result.is_on());
        assert_eq!(result.intensity(), Intensity::ZERO);
    }

    #[test]
    fn should_update_intensity_alone_when_on() {
        let mut state = ActuatorState::default();
        state.apply(turn_on_at(10));

        let result = state.apply(ActuatorCommand::default().intensity(Intensity::new(240)));

        assert!(result.is_on());
        assert_eq!(result.intensity().value(), 240);
    }

    #[test]
    fn should_keep_intensity_when_turned_on_again_without_intensity() {
        let mut state = ActuatorState::default();
        state.apply(turn_on_at(77));

        let result = state.apply(ActuatorCommand::default().power(true));

        assert_eq!(result.intensity().value(), 77);
    }

    #[test]
    fn should_leave_state_untouched_when_command_is_empty() {
        let mut state = ActuatorState::default();
        state.apply(turn_on_at(33));
        let before = state;

        let command = ActuatorCommand::default();
        assert!(command.is_empty());
        assert_eq!(state.apply(command), before);
    }

    #[test]
    fn should_converge_when_same_command_repeated() {
        let mut state = ActuatorState::default();
        let command = turn_on_at(128);

        let first = state.apply(command);
        let second = state.apply(command);
        let third = state.apply(command);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn should_hold_invariant_across_every_command_sequence() {
        let powers = [None, Some(true), Some(false)];
        let intensities = [None, Some(0_u8), Some(1), Some(200), Some(255)];
        let commands: Vec<ActuatorCommand> = powers
            .iter()
            .flat_map(|&is_on| {
                intensities.iter().map(move |&intensity| ActuatorCommand {
                    is_on,
                    intensity: intensity.map(Intensity::new),
                })
            })
            .collect();

        for first in &commands {
            for second in &commands {
                for third in &commands {
                    let mut state = ActuatorState::default();
                    for command in [first, second, third] {
                        let result = state.apply(*command);
                        assert!(holds_invariant(&result), "after {command:?}: {result:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn should_accept_boundary_intensities() {
        assert_eq!(Intensity::try_from(0_i64), Ok(Intensity::ZERO));
        assert_eq!(Intensity::try_from(255_i64), Ok(Intensity::MAX));
    }

    #[test]
    fn should_reject_out_of_range_intensities() {
        assert_eq!(
            Intensity::try_from(256_i64),
            Err(ValidationError::IntensityOutOfRange { value: 256 })
        );
        assert_eq!(
            Intensity::try_from(-1_i64),
            Err(ValidationError::IntensityOutOfRange { value: -1 })
        );
    }

    #[test]
    fn should_serialize_with_camel_case_fields() {
        let mut state = ActuatorState::default();
        state.apply(turn_on_at(100));

        let json = serde_json::to_value(state).unwrap();

        assert_eq!(json, serde_json::json!({"isOn": true, "intensity": 100}));
    }
}
