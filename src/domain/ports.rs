use crate::domain::model::{Coordinates, PostalAddress, YieldEstimate};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Postal code to street address.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, cep: &str) -> Result<PostalAddress>;
}

/// Free-text address to coordinates of the best-ranked match.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn locate(&self, address: &str) -> Result<Coordinates>;
}

/// Photovoltaic production estimate for a location.
///
/// `peak_power_kw` arrives already scaled by any derating factor.
#[async_trait]
pub trait YieldEstimator: Send + Sync {
    async fn estimate(&self, coordinates: Coordinates, peak_power_kw: f64) -> Result<YieldEstimate>;
}
