use crate::adapters::{decode_json, endpoint, parse_base_url, send};
use crate::domain::model::{Coordinates, YieldEstimate};
use crate::domain::ports::YieldEstimator;
use crate::utils::error::{Result, SolarError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const SERVICE: &str = "PVGIS";

pub const RADIATION_DATABASE: &str = "PVGIS-SARAH2";
pub const SYSTEM_LOSS_PERCENT: u32 = 14;

#[derive(Debug, Deserialize)]
struct PvcalcPayload {
    outputs: PvcalcOutputs,
}

#[derive(Debug, Deserialize)]
struct PvcalcOutputs {
    totals: PvcalcTotals,
}

#[derive(Debug, Deserialize)]
struct PvcalcTotals {
    fixed: FixedMountTotals,
}

#[derive(Debug, Deserialize)]
struct FixedMountTotals {
    #[serde(rename = "H(i)_d")]
    daily_irradiation: f64,
    #[serde(rename = "E_d")]
    daily_energy: f64,
    #[serde(rename = "E_y")]
    annual_energy: f64,
}

impl From<FixedMountTotals> for YieldEstimate {
    fn from(totals: FixedMountTotals) -> Self {
        Self {
            daily_irradiation_kwh_m2: totals.daily_irradiation,
            daily_energy_kwh: totals.daily_energy,
            annual_energy_kwh: totals.annual_energy,
        }
    }
}

pub struct PvgisClient {
    client: Client,
    base_url: Url,
}

impl PvgisClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("upstream.pvgis_base_url", base_url)?,
        })
    }
}

#[async_trait]
impl YieldEstimator for PvgisClient {
    async fn estimate(&self, coordinates: Coordinates, peak_power_kw: f64) -> Result<YieldEstimate> {
        let url = endpoint(&self.base_url, &["PVcalc"])?;
        tracing::debug!(
            "☀️ Requesting PV estimate at ({}, {}) for {} kWp",
            coordinates.latitude,
            coordinates.longitude,
            peak_power_kw
        );

        let query = [
            ("lat", coordinates.latitude.to_string()),
            ("lon", coordinates.longitude.to_string()),
            ("outputformat", "json".to_string()),
            ("raddatabase", RADIATION_DATABASE.to_string()),
            ("peakpower", peak_power_kw.to_string()),
            ("loss", SYSTEM_LOSS_PERCENT.to_string()),
        ];

        let response = send(SERVICE, self.client.get(url).query(&query)).await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!("PVGIS answered {}: {}", status, detail);
            return Err(SolarError::EstimationFailed {
                status: status.as_u16(),
            });
        }

        let payload: PvcalcPayload = decode_json(SERVICE, response).await?;
        Ok(payload.outputs.totals.fixed.into())
    }
}
