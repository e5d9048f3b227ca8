//! Liveness service — heartbeats in, online/offline status out.

use std::sync::Mutex;

use lumen_domain::error::LumenError;
use lumen_domain::liveness::{LivenessStatus, LivenessTracker, Transition};
use lumen_domain::time::{Duration, Timestamp};

use super::lock;
use crate::ports::Clock;

/// Application service owning the single [`LivenessTracker`].
///
/// Every operation reads the injected [`Clock`] so request handlers and the
/// sweep agree on one time source.
pub struct LivenessService<C> {
    tracker: Mutex<LivenessTracker>,
    clock: C,
}

impl<C: Clock> LivenessService<C> {
    /// Create a service for a device that is considered offline until its
    /// first heartbeat.
    pub fn new(timeout: Duration, clock: C) -> Self {
        Self {
            tracker: Mutex::new(LivenessTracker::new(timeout)),
            clock,
        }
    }

    /// Record a heartbeat at the current time.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Internal`] if the tracker lock is poisoned.
    pub fn record_heartbeat(&self) -> Result<LivenessStatus, LumenError> {
        let now = self.clock.now();
        let (transition, status) = {
            let mut tracker = lock(&self.tracker, "liveness")?;
            (tracker.record_heartbeat(now), tracker.status())
        };
        log_transition(transition);
        tracing::debug!(at = %now, "heartbeat received");
        Ok(status)
    }

    /// Return the status, expiring it first if the heartbeat is stale.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Internal`] if the tracker lock is poisoned.
    pub fn query_status(&self) -> Result<LivenessStatus, LumenError> {
        let now = self.clock.now();
        let (was_online, status, liveness) = {
            let mut tracker = lock(&self.tracker, "liveness")?;
            let was_online = tracker.liveness().is_online();
            let status = tracker.query_status(now);
            (was_online, status, tracker.liveness())
        };
        if was_online && !status.online {
            log_offline(status.last_heartbeat_at, now);
        }
        tracing::debug!(%liveness, "liveness status fetched");
        Ok(status)
    }

    /// Expire a stale status. Called by the background sweeper.
    ///
    /// Returns the transition, if one happened.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Internal`] if the tracker lock is poisoned.
    pub fn sweep(&self) -> Result<Option<Transition>, LumenError> {
        let now = self.clock.now();
        let transition = lock(&self.tracker, "liveness")?.sweep(now);
        tracing::trace!(at = %now, expired = transition.is_some(), "liveness sweep");
        log_transition(transition);
        Ok(transition)
    }
}

fn log_transition(transition: Option<Transition>) {
    match transition {
        Some(Transition::WentOnline { at }) => {
            tracing::info!(%at, "device is online");
        }
        Some(Transition::WentOffline {
            last_heartbeat_at,
            last_seen_at,
        }) => log_offline(Some(last_heartbeat_at), last_seen_at),
        None => {}
    }
}

fn log_offline(last_heartbeat_at: Option<Timestamp>, last_seen_at: Timestamp) {
    tracing::info!(
        last_heartbeat_at = ?last_heartbeat_at,
        %last_seen_at,
        "device went offline, last seen recorded"
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::test_support::{ManualClock, timestamp};

    fn make_service() -> (LivenessService<Arc<ManualClock>>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at(0));
        let svc = LivenessService::new(Duration::seconds(10), Arc::clone(&clock));
        (svc, clock)
    }

    #[test]
    fn should_report_offline_before_any_heartbeat() {
        let (svc, _) = make_service();
        let status = svc.query_status().unwrap();
        assert!(!status.online);
        assert!(status.last_seen_at.is_none());
    }

    #[test]
    fn should_report_online_after_heartbeat() {
        let (svc, _) = make_service();

        let ack = svc.record_heartbeat().unwrap();
        assert!(ack.online);

        let status = svc.query_status().unwrap();
        assert!(status.online);
        assert_eq!(status.last_heartbeat_at, Some(timestamp(0)));
    }

    #[test]
    fn should_expire_lazily_on_query() {
        let (svc, clock) = make_service();
        svc.record_heartbeat().unwrap();

        clock.advance(9);
        assert!(svc.query_status().unwrap().online);

        clock.advance(2);
        let status = svc.query_status().unwrap();
        assert!(!status.online);
        assert_eq!(status.last_seen_at, Some(timestamp(11)));
    }

    #[test]
    fn should_expire_on_sweep_without_query() {
        let (svc, clock) = make_service();
        svc.record_heartbeat().unwrap();

        clock.advance(5);
        assert!(svc.sweep().unwrap().is_none());

        clock.advance(5);
        let transition = svc.sweep().unwrap();
        assert_eq!(
            transition,
            Some(Transition::WentOffline {
                last_heartbeat_at: timestamp(0),
                last_seen_at: timestamp(10),
            })
        );

        clock.advance(5);
        assert!(svc.sweep().unwrap().is_none());
        assert_eq!(svc.query_status().unwrap().last_seen_at, Some(timestamp(10)));
    }

    #[test]
    fn should_keep_device_online_with_regular_heartbeats() {
        let (svc, clock) = make_service();

        for _ in 0..10 {
            svc.record_heartbeat().unwrap();
            clock.advance(7);
            assert!(svc.sweep().unwrap().is_none());
        }

        assert!(svc.query_status().unwrap().online);
    }
}
