//! JSON REST handlers for the actuator.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use lumen_app::ports::Clock;
use lumen_domain::actuator::{ActuatorCommand, ActuatorState, Intensity};
use lumen_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for commanding the actuator.
///
/// Fields are kept as raw JSON so type errors are reported per field
/// instead of as a generic deserialization failure. `null` counts as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActuatorRequest {
    #[serde(default)]
    pub is_on: Option<Value>,
    #[serde(default)]
    pub intensity: Option<Value>,
}

impl SetActuatorRequest {
    /// Validate every field into an [`ActuatorCommand`].
    ///
    /// Nothing is applied unless the whole request is valid.
    pub fn into_command(self) -> Result<ActuatorCommand, ValidationError> {
        let mut command = ActuatorCommand::default();

        if let Some(value) = self.is_on {
            let is_on = value
                .as_bool()
                .ok_or(ValidationError::NotBoolean { field: "isOn" })?;
            command = command.power(is_on);
        }

        if let Some(value) = self.intensity {
            command = command.intensity(parse_intensity(&value)?);
        }

        Ok(command)
    }
}

fn parse_intensity(value: &Value) -> Result<Intensity, ValidationError> {
    let not_integer = ValidationError::NotInteger { field: "intensity" };
    let Value::Number(number) = value else {
        return Err(not_integer);
    };
    if let Some(raw) = number.as_i64() {
        return Intensity::try_from(raw);
    }
    // Integers too large for i64 are still integers, just out of range.
    if let Some(raw) = number.as_u64() {
        return Err(ValidationError::IntensityOutOfRange {
            value: i128::from(raw),
        });
    }
    Err(not_integer)
}

/// Possible responses from the actuator endpoints.
pub enum ActuatorResponse {
    Ok(Json<ActuatorState>),
}

impl IntoResponse for ActuatorResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /led`
pub async fn get<C>(State(state): State<AppState<C>>) -> Result<ActuatorResponse, ApiError>
where
    C: Clock + 'static,
{
    let current = state.actuator_service.get()?;
    Ok(ActuatorResponse::Ok(Json(current)))
}

/// `POST /led`
pub async fn set<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<SetActuatorRequest>, JsonRejection>,
) -> Result<ActuatorResponse, ApiError>
where
    C: Clock + 'static,
{
    let Json(req) = payload?;
    let command = req.into_command()?;
    let updated = state.actuator_service.set(command)?;
    Ok(ActuatorResponse::Ok(Json(updated)))
}
