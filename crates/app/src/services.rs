//! Application services — use-case implementations.
//!
//! Each service owns one piece of shared state behind its own mutex. Every
//! operation is a single lock / check / mutate / unlock with no `.await`
//! inside, so request handlers and the sweep task never observe a
//! half-applied update and never block each other for longer than that.

pub mod actuator_service;
pub mod liveness_service;

use std::sync::{Mutex, MutexGuard};

use lumen_domain::error::InternalError;

/// Lock `mutex`, turning poisoning into an [`InternalError`].
///
/// A poisoned lock means a panic happened mid-update, so the guarded value
/// may break its invariants and must not be handed out.
fn lock<'a, T>(
    mutex: &'a Mutex<T>,
    resource: &'static str,
) -> Result<MutexGuard<'a, T>, InternalError> {
    mutex
        .lock()
        .map_err(|_| InternalError::LockPoisoned { resource })
}
