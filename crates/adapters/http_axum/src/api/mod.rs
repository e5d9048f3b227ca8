//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod actuator;
#[allow(clippy::missing_errors_doc)]
pub mod hardware;

use axum::Router;
use axum::routing::get;

use lumen_app::ports::Clock;

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: Clock + 'static,
{
    Router::new()
        // Actuator
        .route("/led", get(actuator::get::<C>).post(actuator::set::<C>))
        // Device liveness
        .route(
            "/hardware",
            get(hardware::status::<C>).post(hardware::heartbeat::<C>),
        )
}
