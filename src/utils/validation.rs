use crate::utils::error::{Result, SolarError};
use reqwest::header::HeaderValue;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(SolarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base() => Ok(url),
        Ok(url) => Err(SolarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Unsupported URL scheme: {}", url.scheme()),
        }),
        Err(e) => Err(SolarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SolarError::MissingField {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SolarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The value must be sendable as an HTTP header (no control characters such as `\n`).
pub fn validate_header_value(field_name: &str, value: &str) -> Result<()> {
    HeaderValue::from_str(value).map_err(|e| SolarError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.escape_default().to_string(),
        reason: format!("Not a valid HTTP header value: {}", e),
    })?;
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SolarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Peak power in kW as accepted by the estimator: finite and strictly positive.
pub fn validate_peak_power(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SolarError::InvalidPeakPower {
            value: value.to_string(),
        })
    }
}

pub fn parse_peak_power(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| SolarError::InvalidPeakPower {
        value: raw.to_string(),
    })?;
    validate_peak_power(value)
}
