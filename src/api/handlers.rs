use crate::api::AppState;
use crate::core::{EstimationRequest, EstimationResponse};
use crate::utils::error::{Result, SolarError};
use crate::utils::validation::{parse_peak_power, validate_peak_power, validate_required_field};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub mensagem: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        mensagem: "Está funcionando",
    })
}

/// `GET /api/solar_cep/{cep}/{peakpower}`: peak power is forwarded as given.
pub async fn estimate_from_path(
    State(state): State<AppState>,
    Path((cep, peakpower)): Path<(String, String)>,
) -> Result<Json<EstimationResponse>> {
    let peak_power = parse_peak_power(&peakpower)?;
    let request = EstimationRequest::nominal(cep, peak_power);

    let response = state.pipeline.run(&request).await?;
    Ok(Json(response))
}

/// Body of `POST /api/solar_cep`. Both fields are required; they are optional here
/// so that absence is reported as a missing field rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct EstimationPayload {
    pub cep: Option<String>,
    pub peakpower: Option<f64>,
}

impl EstimationPayload {
    pub fn into_request(self) -> Result<EstimationRequest> {
        let cep = validate_required_field("cep", &self.cep)?.trim();
        if cep.is_empty() {
            return Err(SolarError::MissingField {
                field: "cep".to_string(),
            });
        }
        let peak_power = validate_peak_power(*validate_required_field("peakpower", &self.peakpower)?)?;

        Ok(EstimationRequest::derated(cep, peak_power))
    }
}

/// `POST /api/solar_cep`: peak power is derated before estimation and the factor is echoed back.
pub async fn estimate_from_body(
    State(state): State<AppState>,
    payload: std::result::Result<Json<EstimationPayload>, JsonRejection>,
) -> Result<Json<EstimationResponse>> {
    let Json(payload) = payload.map_err(|rejection| SolarError::InvalidBody {
        message: rejection.body_text(),
    })?;
    let request = payload.into_request()?;

    let response = state.pipeline.run(&request).await?;
    Ok(Json(response))
}
