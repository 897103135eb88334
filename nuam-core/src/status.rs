//! Status line text shown under the chart.

use crate::error::LoadError;
use crate::payload::SeriesPayload;

const LOADING_MESSAGE: &str = "Cargando datos...";

/// Message plus error styling flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn loading() -> Self {
        Self {
            message: LOADING_MESSAGE.to_string(),
            is_error: false,
        }
    }

    /// Summary of a successful load: description and number of points.
    pub fn showing(payload: &SeriesPayload) -> Self {
        Self {
            message: format!(
                "Mostrando {} (últimos {} días).",
                payload.descripcion,
                payload.point_count()
            ),
            is_error: false,
        }
    }

    pub fn failed(err: &LoadError) -> Self {
        Self {
            message: format!("Error al cargar datos: {}", err),
            is_error: true,
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_error {
            "status error"
        } else {
            "status"
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::loading()
    }
}
