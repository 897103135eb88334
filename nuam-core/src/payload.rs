//! Series payload returned by `/api/indicador/{country}/{indicator}/` and the
//! decision of whether a response is usable.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One indicator's time series, replaced wholesale on every successful load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPayload {
    /// Date labels, oldest first (e.g. "2024-01-01")
    pub labels: Vec<String>,
    /// One value per label
    pub data: Vec<f64>,
    /// Human-readable description (e.g. "1 USD en CLP")
    pub descripcion: String,
    /// Country code echoed by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pais: Option<String>,
    /// Indicator code echoed by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicador: Option<String>,
}

impl SeriesPayload {
    /// Number of (date, value) points.
    pub fn point_count(&self) -> usize {
        self.labels.len()
    }
}

/// Raw transport response, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one load attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Succeeded(SeriesPayload),
    Failed(LoadError),
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadOutcome::Succeeded(_))
    }
}

impl From<Result<SeriesPayload, LoadError>> for LoadOutcome {
    fn from(result: Result<SeriesPayload, LoadError>) -> Self {
        match result {
            Ok(payload) => LoadOutcome::Succeeded(payload),
            Err(err) => LoadOutcome::Failed(err),
        }
    }
}

/// Message carried by a truthy `error` field.
///
/// `null`, `false`, `0` and `""` count as absent. Strings are used verbatim,
/// any other value by its JSON text.
fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Validate a transport response.
///
/// Order matters: a non-2xx status fails regardless of body, then an `error`
/// field fails regardless of status, then the body must decode into a
/// consistent series.
pub fn evaluate_response(response: &RawResponse) -> LoadOutcome {
    decode(response).into()
}

fn decode(response: &RawResponse) -> Result<SeriesPayload, LoadError> {
    if !response.is_success() {
        return Err(LoadError::Http(response.status));
    }

    let value: Value = serde_json::from_str(&response.body)
        .map_err(|e| unexpected("respuesta no es JSON válido", e))?;

    if let Some(msg) = error_message(&value) {
        return Err(LoadError::Payload(msg));
    }

    let payload: SeriesPayload = serde_json::from_value(value)
        .map_err(|e| unexpected("formato de serie inválido", e))?;

    if payload.labels.len() != payload.data.len() {
        return Err(LoadError::Unexpected(format!(
            "la serie recibida es inconsistente ({} fechas, {} valores)",
            payload.labels.len(),
            payload.data.len()
        )));
    }

    Ok(payload)
}

fn unexpected(context: &str, err: serde_json::Error) -> LoadError {
    LoadError::Unexpected(format!("{}: {}", context, err))
}
