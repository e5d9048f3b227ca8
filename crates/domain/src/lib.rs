//! # lumen-domain
//!
//! Pure domain model for the lumen actuator controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **actuator** (an on/off output with an 8-bit intensity) and
//!   the validated commands that mutate it
//! - Define the **liveness** state machine that turns heartbeat arrivals into
//!   an online/offline status
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Time is always passed in by the caller; nothing here reads a clock except
//! [`time::now`].

pub mod error;
pub mod time;

pub mod actuator;
pub mod liveness;
