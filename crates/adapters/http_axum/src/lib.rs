//! # lumen-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API used by the dashboard and the device firmware:
//!   - `GET/POST /led` — read and command the actuator
//!   - `GET/POST /hardware` — liveness status and heartbeats
//!   - `GET /health` — process liveness probe
//! - Validate request bodies into domain commands before calling a service
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `lumen-app` (for services and the clock port) and
//! `lumen-domain` (for types used in request/response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
