use serde::Serialize;

/// Multiplier applied to the peak power on the body endpoint.
pub const DERATING_FACTOR: f64 = 0.8;

/// Appended to every geocoding query; only Brazilian addresses are resolved.
pub const COUNTRY: &str = "Brasil";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl PostalAddress {
    /// "street, neighborhood, city, state, country"
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.street, self.neighborhood, self.city, self.state, COUNTRY
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fixed-mount production totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldEstimate {
    pub daily_irradiation_kwh_m2: f64,
    pub daily_energy_kwh: f64,
    pub annual_energy_kwh: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimationRequest {
    pub cep: String,
    pub peak_power_kw: f64,
    pub power_factor: Option<f64>,
}

impl EstimationRequest {
    /// Peak power forwarded untouched.
    pub fn nominal(cep: impl Into<String>, peak_power_kw: f64) -> Self {
        Self {
            cep: cep.into(),
            peak_power_kw,
            power_factor: None,
        }
    }

    /// Peak power scaled by [`DERATING_FACTOR`], which is echoed back in the response.
    pub fn derated(cep: impl Into<String>, peak_power_kw: f64) -> Self {
        Self {
            cep: cep.into(),
            peak_power_kw,
            power_factor: Some(DERATING_FACTOR),
        }
    }

    pub fn effective_peak_power(&self) -> f64 {
        match self.power_factor {
            Some(factor) => self.peak_power_kw * factor,
            None => self.peak_power_kw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResponse {
    pub cep: String,
    pub endereco: String,
    pub latitude: f64,
    pub longitude: f64,
    pub irradicao_diaria_kwh_m2: f64,
    pub energia_diaria_kwh: f64,
    pub energia_anual_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fator_potencia_aplicado: Option<f64>,
}

impl EstimationResponse {
    pub fn assemble(
        request: &EstimationRequest,
        address: &str,
        coordinates: Coordinates,
        estimate: YieldEstimate,
    ) -> Self {
        Self {
            cep: request.cep.clone(),
            endereco: address.to_string(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            irradicao_diaria_kwh_m2: estimate.daily_irradiation_kwh_m2,
            energia_diaria_kwh: estimate.daily_energy_kwh,
            energia_anual_kwh: estimate.annual_energy_kwh,
            fator_potencia_aplicado: request.power_factor,
        }
    }
}
