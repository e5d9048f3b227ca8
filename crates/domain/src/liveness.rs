//! Liveness — online/offline status of the physical device, derived from
//! heartbeats.
//!
//! The device never announces that it is going away; a gap between
//! heartbeats of at least the configured timeout is the only signal. The
//! tracker is a two-state machine:
//!
//! ```text
//!            heartbeat                      heartbeat (refresh)
//! OFFLINE ──────────────► ONLINE ◄────────┐
//!    ▲                      │  └───────────┘
//!    └──────────────────────┘
//!     now - last_heartbeat_at >= timeout
//!     (detected by sweep or query; sets last_seen_at = now)
//! ```
//!
//! All operations take the current time as an argument so the machine is
//! deterministic and clock-agnostic.

use serde::Serialize;

use crate::time::{Duration, Timestamp};

/// Discrete liveness state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Liveness {
    #[default]
    Offline,
    Online,
}

impl Liveness {
    #[must_use]
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl std::fmt::Display for Liveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offline => f.write_str("offline"),
            Self::Online => f.write_str("online"),
        }
    }
}

/// A change of [`Liveness`] caused by a heartbeat or a staleness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First heartbeat after being offline.
    WentOnline { at: Timestamp },
    /// The heartbeat gap reached the timeout.
    WentOffline {
        last_heartbeat_at: Timestamp,
        last_seen_at: Timestamp,
    },
}

/// Snapshot of the tracker returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivenessStatus {
    pub online: bool,
    /// When the device was last detected going offline.
    pub last_seen_at: Option<Timestamp>,
    pub last_heartbeat_at: Option<Timestamp>,
}

/// Heartbeat-driven liveness state machine.
///
/// Invariants, checked at every observation point:
/// - `online` implies `last_heartbeat_at` is set;
/// - `online` implies `now - last_heartbeat_at < timeout`.
#[derive(Debug, Clone)]
pub struct LivenessTracker {
    timeout: Duration,
    last_heartbeat_at: Option<Timestamp>,
    online: bool,
    last_seen_at: Option<Timestamp>,
}

impl LivenessTracker {
    /// Create an offline tracker that has never seen a heartbeat.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_heartbeat_at: None,
            online: false,
            last_seen_at: None,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn liveness(&self) -> Liveness {
        if self.online {
            Liveness::Online
        } else {
            Liveness::Offline
        }
    }

    /// Record a heartbeat received at `now`.
    ///
    /// Always marks the device online and refreshes the heartbeat time.
    /// Returns [`Transition::WentOnline`] when the device was offline.
    pub fn record_heartbeat(&mut self, now: Timestamp) -> Option<Transition> {
        let was_online = self.online;
        self.last_heartbeat_at = Some(now);
        self.online = true;
        (!was_online).then_some(Transition::WentOnline { at: now })
    }

    /// Lazily expire a stale status, then return a snapshot.
    pub fn query_status(&mut self, now: Timestamp) -> LivenessStatus {
        self.sweep(now);
        self.status()
    }

    /// Transition to offline if the heartbeat gap reached the timeout.
    ///
    /// `last_seen_at` records the detection time `now`. A gap that is
    /// negative (clock moved backwards) is never stale.
    pub fn sweep(&mut self, now: Timestamp) -> Option<Transition> {
        if !self.online {
            return None;
        }
        let last_heartbeat_at = self.last_heartbeat_at?;
        if now.signed_duration_since(last_heartbeat_at) < self.timeout {
            return None;
        }

        self.online = false;
        self.last_seen_at = Some(now);
        Some(Transition::WentOffline {
            last_heartbeat_at,
            last_seen_at: now,
        })
    }

    /// Snapshot without any staleness check.
    #[must_use]
    pub fn status(&self) -> LivenessStatus {
        LivenessStatus {
            online: self.online,
            last_seen_at: self.last_seen_at,
            last_heartbeat_at: self.last_heartbeat_at,
        }
    }
}
