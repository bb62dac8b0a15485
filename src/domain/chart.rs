// Chart input models - the shaped structures handed to the rendering side
use crate::domain::records::{GraphLink, GraphNode};
use serde::{Serialize, Serializer};

/// One position in a derived series. `Missing` marks indices where the
/// computation is not defined (moving-average warmup, first percent-change
/// entry, zero-base percent change) and serializes as the `"-"` placeholder
/// the rendering side expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesValue {
    Number(f64),
    Missing,
}

impl Serialize for SeriesValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeriesValue::Number(v) => serializer.serialize_f64(*v),
            SeriesValue::Missing => serializer.serialize_str("-"),
        }
    }
}

/// A named numeric series, index-aligned with its chart's category axis.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesChart {
    pub dates: Vec<String>,
    pub series: Vec<MetricSeries>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChart {
    pub dates: Vec<String>,
    pub sales: Vec<f64>,
    pub moving_average: Vec<SeriesValue>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewChart {
    pub dates: Vec<String>,
    pub sales: Vec<f64>,
    pub change_percent: Vec<SeriesValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub series: Vec<MetricSeries>,
}

/// Radar axis: the per-indicator maximum across all input records becomes the
/// scale ceiling; entry values pass through raw.
#[derive(Debug, Clone, Serialize)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarEntry {
    pub name: String,
    pub values: [f64; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarChart {
    pub indicators: Vec<RadarIndicator>,
    pub entries: Vec<RadarEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapEntry {
    pub name: String,
    pub value: f64,
    pub gdp: f64,
    pub population: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapChart {
    pub entries: Vec<MapEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterGroup {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterChart {
    pub groups: Vec<ScatterGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphChart {
    pub categories: Vec<String>,
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowChart {
    pub nodes: Vec<String>,
    pub links: Vec<FlowLink>,
}

const OVER_TARGET_STOPS: [(f64, &str); 3] =
    [(0.3, "#91c7ae"), (0.7, "#63869e"), (1.0, "#c23531")];
const WITHIN_TARGET_STOPS: [(f64, &str); 3] =
    [(0.3, "#67e0e3"), (0.7, "#91c7ae"), (1.0, "#c23531")];

/// Color-stop ramp for one gauge, selected by whether the reading exceeds its
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GaugePalette {
    OverTarget,
    WithinTarget,
}

impl GaugePalette {
    pub fn stops(self) -> &'static [(f64, &'static str)] {
        match self {
            GaugePalette::OverTarget => &OVER_TARGET_STOPS,
            GaugePalette::WithinTarget => &WITHIN_TARGET_STOPS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeEntry {
    pub name: String,
    pub value: f64,
    pub target: f64,
    pub palette: GaugePalette,
    pub stops: &'static [(f64, &'static str)],
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeChart {
    pub min: f64,
    pub max: f64,
    pub entries: Vec<GaugeEntry>,
}

/// One shaped chart, tagged with its kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "spec", rename_all = "camelCase")]
pub enum ChartInput {
    TimeSeries(TimeSeriesChart),
    Trend(TrendChart),
    Overview(OverviewChart),
    Pie(PieChart),
    Bar(BarChart),
    Radar(RadarChart),
    Map(MapChart),
    Scatter(ScatterChart),
    Graph(GraphChart),
    Flow(FlowChart),
    Gauge(GaugeChart),
}

/// A chart input paired with the identifier the rendering side mounts it
/// under.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub id: String,
    pub chart: ChartInput,
}

impl ChartView {
    pub fn new(id: impl Into<String>, chart: ChartInput) -> Self {
        Self {
            id: id.into(),
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_serializes_as_placeholder() {
        let values = vec![SeriesValue::Missing, SeriesValue::Number(10.0)];
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json, serde_json::json!(["-", 10.0]));
    }

    #[test]
    fn test_chart_input_is_kind_tagged() {
        let chart = ChartInput::Pie(PieChart {
            slices: vec![PieSlice {
                name: "Books".to_string(),
                value: 12.0,
            }],
        });
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["spec"]["slices"][0]["name"], "Books");
    }

    #[test]
    fn test_palette_ramps_differ() {
        assert_ne!(
            GaugePalette::OverTarget.stops()[0].1,
            GaugePalette::WithinTarget.stops()[0].1
        );
        assert_eq!(GaugePalette::OverTarget.stops().len(), 3);
    }
}
