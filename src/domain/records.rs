// Upstream record models - one flat reporting unit per struct
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    pub date: String,
    pub sales: f64,
    pub traffic: f64,
    pub users: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub category: String,
    pub sales_amount: f64,
    pub profit: f64,
    pub customer_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRecord {
    pub region: String,
    pub value: f64,
    pub gdp: f64,
    pub population: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterRecord {
    pub x: f64,
    pub y: f64,
    pub cluster: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub category: u32,
    pub value: f64,
    pub symbol_size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// Node and edge lists for the relationship graph. Links reference nodes by
/// their `id` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeRecord {
    pub name: String,
    pub value: f64,
    pub target: f64,
}

/// Combined payload served by `/api/data/all` and consumed by the remote
/// source client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    pub time_series: Vec<TimeSeriesRecord>,
    pub categories: Vec<CategoryRecord>,
    pub geo: Vec<GeoRecord>,
    pub scatter: Vec<ScatterRecord>,
    pub network: NetworkData,
    pub gauge: Vec<GaugeRecord>,
}
