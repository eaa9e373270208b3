use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolarError {
    #[error("CEP inválido: {cep}")]
    InvalidPostalCode { cep: String },

    #[error("Não foi possível obter as coordenadas do endereço: {address}")]
    GeocodingFailed { address: String },

    #[error("Erro ao consultar a estimativa de produção solar (status {status})")]
    EstimationFailed { status: u16 },

    #[error("Campo obrigatório ausente: {field}")]
    MissingField { field: String },

    #[error("Potência de pico inválida: {value}")]
    InvalidPeakPower { value: String },

    #[error("Corpo da requisição inválido: {message}")]
    InvalidBody { message: String },

    #[error("Resposta inesperada do serviço {service}: {message}")]
    MalformedUpstreamResponse { service: String, message: String },

    #[error("Serviço {service} indisponível: {source}")]
    UpstreamUnavailable {
        service: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SolarError {
    /// HTTP status the error is reported with.
    ///
    /// `EstimationFailed` mirrors whatever the estimator answered with.
    pub fn status_code(&self) -> u16 {
        match self {
            SolarError::InvalidPostalCode { .. }
            | SolarError::MissingField { .. }
            | SolarError::InvalidPeakPower { .. }
            | SolarError::InvalidBody { .. } => 400,
            SolarError::EstimationFailed { status } => *status,
            SolarError::MalformedUpstreamResponse { .. }
            | SolarError::UpstreamUnavailable { .. } => 502,
            SolarError::GeocodingFailed { .. }
            | SolarError::ConfigError { .. }
            | SolarError::InvalidConfigValueError { .. }
            | SolarError::IoError(_) => 500,
        }
    }

    /// Whether the failure was caused by the client's input rather than by us or an upstream.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Short message sent back in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            SolarError::InvalidPostalCode { .. } => "CEP inválido".to_string(),
            SolarError::GeocodingFailed { .. } => {
                "Não foi possível obter as coordenadas do endereço".to_string()
            }
            SolarError::EstimationFailed { .. } => {
                "Erro ao consultar a estimativa de produção solar".to_string()
            }
            SolarError::MalformedUpstreamResponse { service, .. }
            | SolarError::UpstreamUnavailable { service, .. } => {
                format!("Falha ao consultar o serviço {}", service)
            }
            SolarError::ConfigError { .. }
            | SolarError::InvalidConfigValueError { .. }
            | SolarError::IoError(_) => "Erro interno do servidor".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let errors = [
            SolarError::InvalidPostalCode {
                cep: "00000000".to_string(),
            },
            SolarError::MissingField {
                field: "cep".to_string(),
            },
            SolarError::InvalidPeakPower {
                value: "abc".to_string(),
            },
        ];

        for error in errors {
            assert_eq!(error.status_code(), 400);
            assert!(error.is_client_error());
        }
    }

    #[test]
    fn test_geocoding_failure_is_server_error() {
        let error = SolarError::GeocodingFailed {
            address: "Rua X, B, City, ST, Brasil".to_string(),
        };
        assert_eq!(error.status_code(), 500);
        assert!(!error.is_client_error());
    }

    #[test]
    fn test_estimation_failure_mirrors_upstream_status() {
        assert_eq!(SolarError::EstimationFailed { status: 529 }.status_code(), 529);
        assert_eq!(SolarError::EstimationFailed { status: 400 }.status_code(), 400);
    }

    #[test]
    fn test_public_message_hides_internal_details() {
        let error = SolarError::MalformedUpstreamResponse {
            service: "PVGIS".to_string(),
            message: "missing field `E_y`".to_string(),
        };
        assert_eq!(error.public_message(), "Falha ao consultar o serviço PVGIS");

        let error = SolarError::MissingField {
            field: "peakpower".to_string(),
        };
        assert_eq!(error.public_message(), "Campo obrigatório ausente: peakpower");
    }
}
