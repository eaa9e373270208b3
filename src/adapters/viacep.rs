use crate::adapters::{decode_json, endpoint, parse_base_url, send};
use crate::domain::model::PostalAddress;
use crate::domain::ports::AddressResolver;
use crate::utils::error::{Result, SolarError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const SERVICE: &str = "ViaCEP";

#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
}

impl ViaCepPayload {
    /// ViaCEP answers 200 with `{"erro": true}` (older deployments: `"true"`) for unknown codes.
    fn is_not_found(&self) -> bool {
        match &self.erro {
            None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => false,
            Some(_) => true,
        }
    }

    fn into_address(self) -> Result<PostalAddress> {
        Ok(PostalAddress {
            street: required("logradouro", self.logradouro)?,
            neighborhood: required("bairro", self.bairro)?,
            city: required("localidade", self.localidade)?,
            state: required("uf", self.uf)?,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| SolarError::MalformedUpstreamResponse {
        service: SERVICE.to_string(),
        message: format!("missing field `{}`", field),
    })
}

pub struct ViaCepClient {
    client: Client,
    base_url: Url,
}

impl ViaCepClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("upstream.viacep_base_url", base_url)?,
        })
    }
}

#[async_trait]
impl AddressResolver for ViaCepClient {
    async fn resolve(&self, cep: &str) -> Result<PostalAddress> {
        let url = endpoint(&self.base_url, &["ws", cep, "json", ""])?;
        tracing::debug!("🔎 Resolving CEP {} via {}", cep, url);

        let response = send(SERVICE, self.client.get(url)).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("ViaCEP answered {} for CEP {}", status, cep);
            return Err(SolarError::InvalidPostalCode {
                cep: cep.to_string(),
            });
        }

        let payload: ViaCepPayload = decode_json(SERVICE, response).await?;
        if payload.is_not_found() {
            tracing::warn!("ViaCEP reported CEP {} as not found", cep);
            return Err(SolarError::InvalidPostalCode {
                cep: cep.to_string(),
            });
        }

        payload.into_address()
    }
}
