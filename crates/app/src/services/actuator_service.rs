//! Actuator service — use-cases for reading and commanding the actuator.

use std::sync::Mutex;

use lumen_domain::actuator::{ActuatorCommand, ActuatorState};
use lumen_domain::error::LumenError;

use super::lock;

/// Application service owning the single [`ActuatorState`].
#[derive(Debug, Default)]
pub struct ActuatorService {
    state: Mutex<ActuatorState>,
}

impl ActuatorService {
    /// Create a service with the actuator off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current state, re-normalising it first.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Internal`] if the state lock is poisoned.
    pub fn get(&self) -> Result<ActuatorState, LumenError> {
        let state = lock(&self.state, "actuator")?.normalize();
        tracing::debug!(
            is_on = state.is_on(),
            intensity = %state.intensity(),
            "actuator state fetched"
        );
        Ok(state)
    }

    /// Apply a validated command and return the post-mutation state.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Internal`] if the state lock is poisoned.
    pub fn set(&self, command: ActuatorCommand) -> Result<ActuatorState, LumenError> {
        let (before, after) = {
            let mut state = lock(&self.state, "actuator")?;
            let before = *state;
            (before, state.apply(command))
        };

        if let Some(discarded) = command.intensity
            && !after.is_on()
        {
            tracing::debug!(intensity = %discarded, "intensity ignored while actuator is off");
        }
        if before == after {
            tracing::debug!(?command, "actuator command left state unchanged");
        } else {
            tracing::info!(
                is_on = after.is_on(),
                intensity = %after.intensity(),
                "actuator state updated"
            );
        }
        Ok(after)
    }
}
