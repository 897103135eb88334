/// Error types for the indicator pages
use thiserror::Error;

/// Why an indicator load failed.
///
/// The `Display` text is what ends up on the status line, so each variant
/// renders exactly the message the user should see.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Transport answered with a non-2xx status
    #[error("Error HTTP {0}")]
    Http(u16),

    /// Backend answered with an explicit `error` field
    #[error("{0}")]
    Payload(String),

    /// Network, decode or shape failure
    #[error("{0}")]
    Unexpected(String),
}

/// Problems found while loading a catalog definition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Empty country code")]
    EmptyCountryCode,

    #[error("Duplicate country code: {0}")]
    DuplicateCountry(String),

    #[error("Empty indicator code in country {0}")]
    EmptyIndicatorCode(String),

    #[error("Duplicate indicator {indicator} in country {country}")]
    DuplicateIndicator { country: String, indicator: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_renders_status() {
        assert_eq!(LoadError::Http(500).to_string(), "Error HTTP 500");
    }

    #[test]
    fn payload_error_renders_verbatim() {
        assert_eq!(
            LoadError::Payload("sin datos".to_string()).to_string(),
            "sin datos"
        );
    }
}
