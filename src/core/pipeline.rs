use crate::adapters::{build_http_client, NominatimClient, PvgisClient, ViaCepClient};
use crate::config::UpstreamConfig;
use crate::core::{
    AddressResolver, EstimationRequest, EstimationResponse, Geocoder, YieldEstimator,
};
use crate::utils::error::Result;
use std::sync::Arc;

/// Resolver → Geocoder → Estimator, strictly in sequence.
///
/// The first failing stage aborts the run; later stages are never called.
pub struct SolarPipeline {
    resolver: Arc<dyn AddressResolver>,
    geocoder: Arc<dyn Geocoder>,
    estimator: Arc<dyn YieldEstimator>,
}

impl SolarPipeline {
    pub fn new(
        resolver: Arc<dyn AddressResolver>,
        geocoder: Arc<dyn Geocoder>,
        estimator: Arc<dyn YieldEstimator>,
    ) -> Self {
        Self {
            resolver,
            geocoder,
            estimator,
        }
    }

    /// Wire the HTTP adapters for the configured upstream services.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let client = build_http_client(config)?;

        Ok(Self::new(
            Arc::new(ViaCepClient::new(client.clone(), &config.viacep_base_url)?),
            Arc::new(NominatimClient::new(
                client.clone(),
                &config.nominatim_base_url,
                config.user_agent.clone(),
            )?),
            Arc::new(PvgisClient::new(client, &config.pvgis_base_url)?),
        ))
    }

    pub async fn run(&self, request: &EstimationRequest) -> Result<EstimationResponse> {
        tracing::debug!("Stage 1/3: resolving CEP {}", request.cep);
        let address = self.resolver.resolve(&request.cep).await?;
        let full_address = address.full_address();

        tracing::debug!("Stage 2/3: geocoding '{}'", full_address);
        let coordinates = self.geocoder.locate(&full_address).await?;

        let peak_power = request.effective_peak_power();
        tracing::debug!(
            "Stage 3/3: estimating yield for {} kWp (factor {:?})",
            peak_power,
            request.power_factor
        );
        let estimate = self.estimator.estimate(coordinates, peak_power).await?;

        tracing::info!(
            "✅ CEP {} → {:.1} kWh/year at ({}, {})",
            request.cep,
            estimate.annual_energy_kwh,
            coordinates.latitude,
            coordinates.longitude
        );

        Ok(EstimationResponse::assemble(
            request,
            &full_address,
            coordinates,
            estimate,
        ))
    }
}
