//! Background liveness sweep.
//!
//! The device cannot report that it went away, so a timer task re-checks the
//! heartbeat gap on a fixed cadence, independently of incoming requests.
//! With a cadence of half the timeout, a dead device is reported offline at
//! most `timeout + cadence` after its last heartbeat even if nobody queries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ports::Clock;
use crate::services::liveness_service::LivenessService;

/// Periodic task calling [`LivenessService::sweep`].
pub struct LivenessSweeper<C> {
    service: Arc<LivenessService<C>>,
    cadence: Duration,
}

impl<C: Clock + 'static> LivenessSweeper<C> {
    /// Spawn the sweep loop on the current tokio runtime.
    ///
    /// The task runs until the returned handle is aborted.
    ///
    /// # Panics
    ///
    /// Panics if `cadence` is zero.
    pub fn start(service: Arc<LivenessService<C>>, cadence: Duration) -> JoinHandle<()> {
        assert!(!cadence.is_zero(), "sweep cadence must be non-zero");
        let sweeper = Self { service, cadence };
        tracing::info!(cadence_secs = cadence.as_secs_f64(), "liveness sweeper started");
        tokio::spawn(sweeper.run())
    }

    async fn run(self) {
        let mut ticker = tokio::time::interval(self.cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = self.service.sweep() {
                tracing::error!(%err, "liveness sweep failed, retrying next tick");
            }
        }
    }
}
