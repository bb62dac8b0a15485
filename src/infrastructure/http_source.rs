// Remote data API client - AnalyticsSource over HTTP JSON
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::analytics_source::AnalyticsSource;
use crate::domain::records::{
    AnalyticsPayload, CategoryRecord, GaugeRecord, GeoRecord, NetworkData, ScatterRecord,
    TimeSeriesRecord,
};

/// Client for a remote instance of the data API served by this binary's
/// `serve` mode (or any endpoint speaking the same JSON shapes).
#[derive(Debug, Clone)]
pub struct HttpAnalyticsSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalyticsSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("failed to reach data API at {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("data API request {url} failed with status {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode data API response from {url}"))
    }
}

#[async_trait]
impl AnalyticsSource for HttpAnalyticsSource {
    async fn time_series(&self, days: u32) -> Result<Vec<TimeSeriesRecord>> {
        self.fetch("/api/data/time-series", &[("days", days.to_string())])
            .await
    }

    async fn categories(&self) -> Result<Vec<CategoryRecord>> {
        self.fetch("/api/data/categories", &[]).await
    }

    async fn geo(&self) -> Result<Vec<GeoRecord>> {
        self.fetch("/api/data/geo", &[]).await
    }

    async fn scatter(&self, samples: usize) -> Result<Vec<ScatterRecord>> {
        self.fetch("/api/data/scatter", &[("samples", samples.to_string())])
            .await
    }

    async fn network(&self) -> Result<NetworkData> {
        self.fetch("/api/data/network", &[]).await
    }

    async fn gauges(&self) -> Result<Vec<GaugeRecord>> {
        self.fetch("/api/data/gauge", &[]).await
    }

    async fn snapshot(&self, days: u32, samples: usize) -> Result<AnalyticsPayload> {
        self.fetch(
            "/api/data/all",
            &[("days", days.to_string()), ("samples", samples.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let source = HttpAnalyticsSource::new("http://127.0.0.1:8080/");
        assert_eq!(source.base_url, "http://127.0.0.1:8080");
    }
}
