use crate::adapters::{decode_json, endpoint, parse_base_url, send};
use crate::domain::model::Coordinates;
use crate::domain::ports::Geocoder;
use crate::utils::error::{Result, SolarError};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const SERVICE: &str = "Nominatim";

/// Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn parse_coordinate(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| SolarError::MalformedUpstreamResponse {
            service: SERVICE.to_string(),
            message: format!("`{}` is not a decimal ({}): {}", field, e, raw),
        })
}

pub struct NominatimClient {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl NominatimClient {
    pub fn new(client: Client, base_url: &str, user_agent: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("upstream.nominatim_base_url", base_url)?,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn locate(&self, address: &str) -> Result<Coordinates> {
        let url = endpoint(&self.base_url, &["search"])?;
        tracing::debug!("🗺️ Geocoding address: {}", address);

        let request = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .query(&[("q", address), ("format", "json")]);

        let response = send(SERVICE, request).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Nominatim answered {} for address {}", status, address);
            return Err(SolarError::GeocodingFailed {
                address: address.to_string(),
            });
        }

        let places: Vec<serde_json::Value> = decode_json(SERVICE, response).await?;
        // Candidates arrive ranked; the first one wins and is the only one decoded.
        let Some(first) = places.into_iter().next() else {
            tracing::warn!("Nominatim returned no candidates for address {}", address);
            return Err(SolarError::GeocodingFailed {
                address: address.to_string(),
            });
        };
        let best: NominatimPlace =
            serde_json::from_value(first).map_err(|e| SolarError::MalformedUpstreamResponse {
                service: SERVICE.to_string(),
                message: e.to_string(),
            })?;

        Ok(Coordinates {
            latitude: parse_coordinate("lat", &best.lat)?,
            longitude: parse_coordinate("lon", &best.lon)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const AGENT: &str = "solar-cep-test/1.0";
    const ADDRESS: &str = "Rua X, B, City, ST, Brasil";

    fn client_for(server: &MockServer) -> NominatimClient {
        NominatimClient::new(Client::new(), &server.base_url(), AGENT).unwrap()
    }

    #[tokio::test]
    async fn test_locate_uses_first_candidate_and_sends_user_agent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search")
                    .query_param("q", ADDRESS)
                    .query_param("format", "json")
                    .header("user-agent", AGENT);
                then.status(200).json_body(serde_json::json!([
                    {"lat": "-23.5", "lon": "-46.6", "display_name": "first"},
                    {"lat": "-22.9", "lon": "-43.2", "display_name": "second"}
                ]));
            })
            .await;

        let coordinates = client_for(&server).locate(ADDRESS).await.unwrap();

        mock.assert_async().await;
        assert_eq!(coordinates.latitude, -23.5);
        assert_eq!(coordinates.longitude, -46.6);
    }

    #[tokio::test]
    async fn test_later_candidates_are_not_decoded() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).json_body(serde_json::json!([
                    {"lat": "-23.5", "lon": "-46.6"},
                    {"display_name": "no coordinates here"}
                ]));
            })
            .await;

        let coordinates = client_for(&server).locate(ADDRESS).await.unwrap();
        assert_eq!(coordinates.latitude, -23.5);
        assert_eq!(coordinates.longitude, -46.6);
    }

    #[tokio::test]
    async fn test_first_candidate_without_coordinates_is_malformed_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .json_body(serde_json::json!([{"display_name": "no coordinates here"}]));
            })
            .await;

        let result = client_for(&server).locate(ADDRESS).await;
        assert!(matches!(result, Err(SolarError::MalformedUpstreamResponse { .. })));
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_geocoding_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;

        let result = client_for(&server).locate(ADDRESS).await;
        assert!(matches!(result, Err(SolarError::GeocodingFailed { address }) if address == ADDRESS));
    }

    #[tokio::test]
    async fn test_non_success_status_is_geocoding_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(403).body("Access blocked");
            })
            .await;

        let result = client_for(&server).locate(ADDRESS).await;
        assert!(matches!(result, Err(SolarError::GeocodingFailed { .. })));
    }

    #[tokio::test]
    async fn test_non_numeric_coordinate_is_malformed_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .json_body(serde_json::json!([{"lat": "south", "lon": "-46.6"}]));
            })
            .await;

        let result = client_for(&server).locate(ADDRESS).await;
        assert!(matches!(result, Err(SolarError::MalformedUpstreamResponse { .. })));
    }

    #[tokio::test]
    async fn test_object_instead_of_list_is_malformed_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).json_body(serde_json::json!({"error": "Unable to geocode"}));
            })
            .await;

        let result = client_for(&server).locate(ADDRESS).await;
        assert!(matches!(result, Err(SolarError::MalformedUpstreamResponse { .. })));
    }
}
