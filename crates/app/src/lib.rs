//! # lumen-app
//!
//! Application layer — use-cases, **port definitions** (traits) and the
//! background sweep.
//!
//! ## Responsibilities
//! - Define the **clock port** that every time-dependent use-case reads
//!   (`SystemClock` in production, a manual clock in tests)
//! - Own the shared in-memory state behind one lock per structure:
//!   - `ActuatorService` — get / set the actuator
//!   - `LivenessService` — heartbeat, status query, sweep
//! - Run the periodic `LivenessSweeper` that expires stale devices even when
//!   nobody asks for the status
//!
//! ## Dependency rule
//! Depends on `lumen-domain` only (plus `tokio` for the timer task).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod sweeper;
