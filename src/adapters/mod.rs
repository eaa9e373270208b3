// Adapters layer: HTTP clients for the three upstream services.

pub mod nominatim;
pub mod pvgis;
pub mod viacep;

pub use nominatim::NominatimClient;
pub use pvgis::PvgisClient;
pub use viacep::ViaCepClient;

use crate::config::UpstreamConfig;
use crate::utils::error::{Result, SolarError};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// One client shared by every adapter; connection pools are reused across stages.
pub fn build_http_client(config: &UpstreamConfig) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(timeout) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout));
    }

    builder.build().map_err(|e| SolarError::ConfigError {
        message: format!("failed to build HTTP client: {}", e),
    })
}

/// Append escaped path segments to a base URL.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| SolarError::ConfigError {
            message: format!("base URL cannot carry a path: {}", base),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn parse_base_url(field: &str, raw: &str) -> Result<Url> {
    crate::utils::validation::validate_url(field, raw)
}

pub(crate) async fn send(service: &str, request: RequestBuilder) -> Result<Response> {
    request
        .send()
        .await
        .map_err(|source| SolarError::UpstreamUnavailable {
            service: service.to_string(),
            source,
        })
}

pub(crate) async fn decode_json<T: DeserializeOwned>(service: &str, response: Response) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            SolarError::MalformedUpstreamResponse {
                service: service.to_string(),
                message: e.to_string(),
            }
        } else {
            SolarError::UpstreamUnavailable {
                service: service.to_string(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_escapes_segments() {
        let base = Url::parse("https://viacep.com.br").unwrap();
        let url = endpoint(&base, &["ws", "01001-000/../x", "json", ""]).unwrap();
        assert_eq!(url.as_str(), "https://viacep.com.br/ws/01001-000%2F..%2Fx/json/");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("https://re.jrc.ec.europa.eu/api/v5_2").unwrap();
        let url = endpoint(&base, &["PVcalc"]).unwrap();
        assert_eq!(url.as_str(), "https://re.jrc.ec.europa.eu/api/v5_2/PVcalc");

        let base = Url::parse("https://re.jrc.ec.europa.eu/api/v5_2/").unwrap();
        let url = endpoint(&base, &["PVcalc"]).unwrap();
        assert_eq!(url.as_str(), "https://re.jrc.ec.europa.eu/api/v5_2/PVcalc");
    }
}
