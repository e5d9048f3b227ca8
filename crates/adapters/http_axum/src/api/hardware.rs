//! JSON REST handlers for device heartbeats and liveness status.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lumen_app::ports::Clock;
use lumen_domain::error::ValidationError;
use lumen_domain::liveness::LivenessStatus;
use lumen_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body sent by the device on every heartbeat.
#[derive(Debug, Default, Deserialize)]
pub struct HeartbeatRequest {
    #[serde(default)]
    pub heartbeat: Option<Value>,
}

impl HeartbeatRequest {
    /// Check that the liveness marker is present and truthy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.heartbeat {
            Some(marker) if is_truthy(marker) => Ok(()),
            _ => Err(ValidationError::MissingHeartbeat),
        }
    }
}

/// Truthiness as the device firmware understands it: `null`, `false`, `0`
/// and `""` are falsy, anything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Body acknowledging a heartbeat.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatAck {
    pub online: bool,
    pub last_heartbeat_at: Option<Timestamp>,
}

impl From<LivenessStatus> for HeartbeatAck {
    fn from(status: LivenessStatus) -> Self {
        Self {
            online: status.online,
            last_heartbeat_at: status.last_heartbeat_at,
        }
    }
}

/// Possible responses from the heartbeat endpoint.
pub enum HeartbeatResponse {
    Ok(Json<HeartbeatAck>),
}

impl IntoResponse for HeartbeatResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the status endpoint.
pub enum StatusResponse {
    Ok(Json<LivenessStatus>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /hardware`
pub async fn heartbeat<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<HeartbeatRequest>, JsonRejection>,
) -> Result<HeartbeatResponse, ApiError>
where
    C: Clock + 'static,
{
    let Json(req) = payload?;
    req.validate()?;
    let status = state.liveness_service.record_heartbeat()?;
    Ok(HeartbeatResponse::Ok(Json(status.into())))
}

/// `GET /hardware`
pub async fn status<C>(State(state): State<AppState<C>>) -> Result<StatusResponse, ApiError>
where
    C: Clock + 'static,
{
    let status = state.liveness_service.query_status()?;
    Ok(StatusResponse::Ok(Json(status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(marker: Value) -> HeartbeatRequest {
        HeartbeatRequest {
            heartbeat: Some(marker),
        }
    }

    #[test]
    fn should_accept_truthy_markers() {
        for marker in [json!(true), json!(1), json!(-2.5), json!("alive"), json!([]), json!({})] {
            assert!(request(marker).validate().is_ok());
        }
    }

    #[test]
    fn should_reject_falsy_markers() {
        for marker in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(
                request(marker).validate(),
                Err(ValidationError::MissingHeartbeat)
            );
        }
    }

    #[test]
    fn should_reject_missing_marker() {
        assert_eq!(
            HeartbeatRequest::default().validate(),
            Err(ValidationError::MissingHeartbeat)
        );
    }
}
