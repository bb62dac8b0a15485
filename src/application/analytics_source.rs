// Source trait for upstream analytics data
use crate::domain::records::{
    AnalyticsPayload, CategoryRecord, GaugeRecord, GeoRecord, NetworkData, ScatterRecord,
    TimeSeriesRecord,
};
use async_trait::async_trait;

#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// One record per day covering the trailing `days` window
    async fn time_series(&self, days: u32) -> anyhow::Result<Vec<TimeSeriesRecord>>;

    async fn categories(&self) -> anyhow::Result<Vec<CategoryRecord>>;

    async fn geo(&self) -> anyhow::Result<Vec<GeoRecord>>;

    async fn scatter(&self, samples: usize) -> anyhow::Result<Vec<ScatterRecord>>;

    async fn network(&self) -> anyhow::Result<NetworkData>;

    async fn gauges(&self) -> anyhow::Result<Vec<GaugeRecord>>;

    /// All six collections in one combined payload
    async fn snapshot(&self, days: u32, samples: usize) -> anyhow::Result<AnalyticsPayload>;
}
