//! Chart.js configuration for the indicator line chart, and the controller
//! that creates the chart once and updates it in place afterwards.

use crate::payload::SeriesPayload;
use serde_json::{json, Value};

/// Height in pixels over which the fill gradient fades out.
pub const GRADIENT_HEIGHT: u32 = 240;
/// Fill gradient, top to bottom.
pub const GRADIENT_STOPS: [(f64, &str); 2] = [
    (0.0, "rgba(6, 182, 212, 0.35)"),
    (1.0, "rgba(6, 182, 212, 0)"),
];

const BORDER_COLOR: &str = "#22d3ee";
const POINT_COLOR: &str = "#06b6d4";
const LEGEND_COLOR: &str = "#e5e7eb";
const TICK_COLOR: &str = "#9ca3af";

/// The single filled line dataset.
///
/// `backgroundGradient` is not a Chart.js field: the JS bridge turns it into a
/// `CanvasGradient` on the drawing surface and stores it as `backgroundColor`.
pub fn dataset(payload: &SeriesPayload) -> Value {
    json!({
        "label": payload.descripcion,
        "data": payload.data,
        "fill": true,
        "backgroundGradient": {
            "height": GRADIENT_HEIGHT,
            "stops": GRADIENT_STOPS
                .iter()
                .map(|(offset, color)| json!([offset, color]))
                .collect::<Vec<_>>(),
        },
        "borderColor": BORDER_COLOR,
        "borderWidth": 2,
        "tension": 0.3,
        "pointRadius": 3,
        "pointBackgroundColor": POINT_COLOR,
        "pointHoverRadius": 5,
    })
}

/// Full configuration for the first render. Colours are light on purpose,
/// the page background is dark.
pub fn chart_config(payload: &SeriesPayload) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": payload.labels,
            "datasets": [dataset(payload)],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "labels": {
                        "color": LEGEND_COLOR,
                        "font": { "weight": "600" },
                    },
                },
                "tooltip": {
                    "backgroundColor": "#0f172a",
                    "borderColor": "#1f2937",
                    "borderWidth": 1,
                    "titleColor": "#f8fafc",
                    "bodyColor": LEGEND_COLOR,
                },
            },
            "scales": {
                "x": {
                    "ticks": { "color": TICK_COLOR, "maxRotation": 0, "autoSkip": true },
                    "grid": { "color": "rgba(31, 41, 55, 0.4)" },
                },
                "y": {
                    "ticks": { "color": TICK_COLOR },
                    "grid": { "color": "rgba(31, 41, 55, 0.35)" },
                },
            },
        },
    })
}

/// A drawing surface holding at most one chart widget.
pub trait ChartSurface {
    /// Create the widget with a full configuration.
    fn create(&mut self, config: &Value);
    /// Replace labels and datasets of the existing widget and redraw.
    fn update(&mut self, labels: &[String], datasets: &Value);
}

/// Owns the chart widget lifecycle: lazily created on the first payload,
/// mutated in place for every later one, never destroyed.
#[derive(Debug)]
pub struct ChartController<S> {
    surface: S,
    created: bool,
    renders: usize,
}

impl<S: ChartSurface> ChartController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            created: false,
            renders: 0,
        }
    }

    pub fn render(&mut self, payload: &SeriesPayload) {
        if self.created {
            let datasets = json!([dataset(payload)]);
            self.surface.update(&payload.labels, &datasets);
        } else {
            self.surface.create(&chart_config(payload));
            self.created = true;
        }
        self.renders += 1;
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        created: Vec<Value>,
        updates: Vec<(Vec<String>, Value)>,
    }

    impl ChartSurface for RecordingSurface {
        fn create(&mut self, config: &Value) {
            self.created.push(config.clone());
        }

        fn update(&mut self, labels: &[String], datasets: &Value) {
            self.updates.push((labels.to_vec(), datasets.clone()));
        }
    }

    fn payload(desc: &str, points: &[(&str, f64)]) -> SeriesPayload {
        SeriesPayload {
            labels: points.iter().map(|(l, _)| l.to_string()).collect(),
            data: points.iter().map(|(_, v)| *v).collect(),
            descripcion: desc.to_string(),
            pais: None,
            indicador: None,
        }
    }

    #[test]
    fn test_first_render_creates_chart() {
        let mut chart = ChartController::new(RecordingSurface::default());
        let points = [("2024-01-01", 800.0), ("2024-01-02", 810.0)];
        chart.render(&payload("USD/CLP", &points));

        assert!(chart.is_created());
        let surface = chart.surface();
        assert_eq!(surface.created.len(), 1);
        assert!(surface.updates.is_empty());

        let config = &surface.created[0];
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 2);
        let ds = &config["data"]["datasets"][0];
        assert_eq!(ds["data"], json!([800.0, 810.0]));
        assert_eq!(ds["label"], "USD/CLP");
    }

    #[test]
    fn test_later_renders_update_in_place() {
        let mut chart = ChartController::new(RecordingSurface::default());
        chart.render(&payload("UF", &[("2024-01-01", 1.0)]));
        let points = [("2024-02-01", 2.0), ("2024-02-02", 3.0)];
        chart.render(&payload("UTM", &points));
        chart.render(&payload("UF", &[("2024-03-01", 4.0)]));

        let surface = chart.surface();
        assert_eq!(surface.created.len(), 1);
        assert_eq!(surface.updates.len(), 2);
        assert_eq!(surface.updates[0].0, vec!["2024-02-01", "2024-02-02"]);
        assert_eq!(surface.updates[0].1[0]["label"], "UTM");
        assert_eq!(chart.render_count(), 3);
    }

    #[test]
    fn test_dataset_style() {
        let ds = dataset(&payload("UF", &[]));
        assert_eq!(ds["fill"], true);
        assert_eq!(ds["borderColor"], "#22d3ee");
        assert_eq!(ds["borderWidth"], 2);
        assert_eq!(ds["pointRadius"], 3);
        assert_eq!(ds["pointHoverRadius"], 5);
        assert_eq!(ds["backgroundGradient"]["height"], 240);
        let stops = &ds["backgroundGradient"]["stops"];
        assert_eq!(stops[0][1], "rgba(6, 182, 212, 0.35)");
    }

    #[test]
    fn test_theme_is_light_on_dark() {
        let config = chart_config(&payload("UF", &[]));
        let opts = &config["options"];
        assert_eq!(opts["maintainAspectRatio"], false);
        assert_eq!(opts["plugins"]["legend"]["labels"]["color"], "#e5e7eb");
        assert_eq!(opts["plugins"]["tooltip"]["backgroundColor"], "#0f172a");
        assert_eq!(opts["scales"]["x"]["ticks"]["maxRotation"], 0);
        let y_grid = &opts["scales"]["y"]["grid"];
        assert_eq!(y_grid["color"], "rgba(31, 41, 55, 0.35)");
    }
}
