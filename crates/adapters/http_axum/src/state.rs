//! Shared application state for axum handlers.

use std::sync::Arc;

use lumen_app::ports::Clock;
use lumen_app::services::actuator_service::ActuatorService;
use lumen_app::services::liveness_service::LivenessService;

/// Application state shared across all axum handlers.
///
/// Generic over the clock to avoid dynamic dispatch. `Clone` is implemented
/// manually so the clock itself does not need to be `Clone` — only the `Arc`
/// wrappers are cloned.
pub struct AppState<C> {
    /// Actuator get/set service.
    pub actuator_service: Arc<ActuatorService>,
    /// Heartbeat and status service.
    pub liveness_service: Arc<LivenessService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            actuator_service: Arc::clone(&self.actuator_service),
            liveness_service: Arc::clone(&self.liveness_service),
        }
    }
}

impl<C> AppState<C>
where
    C: Clock + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(actuator_service: ActuatorService, liveness_service: LivenessService<C>) -> Self {
        Self {
            actuator_service: Arc::new(actuator_service),
            liveness_service: Arc::new(liveness_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when the liveness service is shared with the background
    /// sweeper.
    pub fn from_arcs(
        actuator_service: Arc<ActuatorService>,
        liveness_service: Arc<LivenessService<C>>,
    ) -> Self {
        Self {
            actuator_service,
            liveness_service,
        }
    }
}
