// Dashboard service - Use case for building shaped section views
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use futures::try_join;
use serde::Serialize;

use crate::application::analytics_source::AnalyticsSource;
use crate::application::shaper;
use crate::domain::chart::{ChartInput, ChartView};

/// The sales-overview chart on the landing section only covers the trailing
/// week of the time-series collection.
pub const OVERVIEW_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    TimeSeries,
    Categories,
    Geo,
    Advanced,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::TimeSeries,
        Section::Categories,
        Section::Geo,
        Section::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::TimeSeries => "time-series",
            Section::Categories => "categories",
            Section::Geo => "geo",
            Section::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or(())
    }
}

/// The shaped charts for one section, ready to hand to the rendering side.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub section: Section,
    pub charts: Vec<ChartView>,
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn AnalyticsSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn AnalyticsSource>) -> Self {
        Self { source }
    }

    /// Fetch the collections a section needs and run one shaping pass over
    /// them. Fetches for multi-collection sections run concurrently; shaping
    /// itself is synchronous.
    pub async fn section_view(
        &self,
        section: Section,
        days: u32,
        samples: usize,
    ) -> anyhow::Result<SectionView> {
        let charts = match section {
            Section::Dashboard => {
                let (gauges, time_series, categories) = try_join!(
                    self.source.gauges(),
                    self.source.time_series(days),
                    self.source.categories(),
                )?;
                let recent = &time_series[time_series.len().saturating_sub(OVERVIEW_DAYS)..];
                vec![
                    ChartView::new("gauge", ChartInput::Gauge(shaper::gauge_chart(&gauges))),
                    ChartView::new(
                        "sales-overview",
                        ChartInput::Overview(shaper::overview_chart(recent)),
                    ),
                    ChartView::new(
                        "category-pie",
                        ChartInput::Pie(shaper::category_pie(&categories)),
                    ),
                ]
            }
            Section::TimeSeries => {
                let time_series = self.source.time_series(days).await?;
                vec![
                    ChartView::new(
                        "time-series",
                        ChartInput::TimeSeries(shaper::time_series_chart(&time_series)),
                    ),
                    ChartView::new("trend", ChartInput::Trend(shaper::trend_chart(&time_series))),
                ]
            }
            Section::Categories => {
                let categories = self.source.categories().await?;
                vec![
                    ChartView::new(
                        "category-pie",
                        ChartInput::Pie(shaper::category_pie(&categories)),
                    ),
                    ChartView::new(
                        "category-bar",
                        ChartInput::Bar(shaper::category_bar(&categories)),
                    ),
                    ChartView::new("radar", ChartInput::Radar(shaper::radar_chart(&categories))),
                ]
            }
            Section::Geo => {
                let geo = self.source.geo().await?;
                vec![ChartView::new(
                    "geo-map",
                    ChartInput::Map(shaper::map_chart(&geo)),
                )]
            }
            Section::Advanced => {
                let (scatter, network) =
                    try_join!(self.source.scatter(samples), self.source.network())?;
                vec![
                    ChartView::new(
                        "scatter",
                        ChartInput::Scatter(shaper::scatter_chart(&scatter)),
                    ),
                    ChartView::new("network", ChartInput::Graph(shaper::graph_chart(&network))),
                    ChartView::new("sankey", ChartInput::Flow(shaper::flow_chart(&network))),
                ]
            }
        };

        Ok(SectionView { section, charts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{
        AnalyticsPayload, CategoryRecord, GaugeRecord, GeoRecord, GraphLink, GraphNode,
        NetworkData, ScatterRecord, TimeSeriesRecord,
    };
    use async_trait::async_trait;

    struct FixedSource;

    impl FixedSource {
        fn days(days: u32) -> Vec<TimeSeriesRecord> {
            (0..days)
                .map(|i| TimeSeriesRecord {
                    date: format!("2026-07-{:02}", i + 1),
                    sales: 100.0 + i as f64,
                    traffic: 1000.0,
                    users: 500.0,
                })
                .collect()
        }
    }

    #[async_trait]
    impl AnalyticsSource for FixedSource {
        async fn time_series(&self, days: u32) -> anyhow::Result<Vec<TimeSeriesRecord>> {
            Ok(Self::days(days))
        }

        async fn categories(&self) -> anyhow::Result<Vec<CategoryRecord>> {
            Ok(vec![CategoryRecord {
                category: "Books".to_string(),
                sales_amount: 12000.0,
                profit: 2400.0,
                customer_count: 96,
            }])
        }

        async fn geo(&self) -> anyhow::Result<Vec<GeoRecord>> {
            Ok(vec![GeoRecord {
                region: "Beijing".to_string(),
                value: 640.0,
                gdp: 4102.55,
                population: 21_540_000,
            }])
        }

        async fn scatter(&self, samples: usize) -> anyhow::Result<Vec<ScatterRecord>> {
            Ok((0..samples)
                .map(|i| ScatterRecord {
                    x: i as f64,
                    y: -(i as f64),
                    cluster: (i % 2) as u32,
                })
                .collect())
        }

        async fn network(&self) -> anyhow::Result<NetworkData> {
            Ok(NetworkData {
                nodes: vec![
                    GraphNode {
                        id: "node0".to_string(),
                        name: "Node 0".to_string(),
                        category: 0,
                        value: 25.0,
                        symbol_size: 25.0,
                    },
                    GraphNode {
                        id: "node1".to_string(),
                        name: "Node 1".to_string(),
                        category: 1,
                        value: 40.0,
                        symbol_size: 40.0,
                    },
                ],
                links: vec![GraphLink {
                    source: "node0".to_string(),
                    target: "node1".to_string(),
                    value: 3.0,
                }],
            })
        }

        async fn gauges(&self) -> anyhow::Result<Vec<GaugeRecord>> {
            Ok(vec![GaugeRecord {
                name: "CPU Usage".to_string(),
                value: 72.0,
                target: 80.0,
            }])
        }

        async fn snapshot(&self, days: u32, samples: usize) -> anyhow::Result<AnalyticsPayload> {
            Ok(AnalyticsPayload {
                time_series: Self::days(days),
                categories: self.categories().await?,
                geo: self.geo().await?,
                scatter: self.scatter(samples).await?,
                network: self.network().await?,
                gauge: self.gauges().await?,
            })
        }
    }

    #[tokio::test]
    async fn test_dashboard_section_composition() {
        let service = DashboardService::new(Arc::new(FixedSource));
        let view = service
            .section_view(Section::Dashboard, 30, 100)
            .await
            .unwrap();

        let ids: Vec<&str> = view.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["gauge", "sales-overview", "category-pie"]);

        // the overview only covers the trailing week of a 30 day window
        match &view.charts[1].chart {
            ChartInput::Overview(chart) => {
                assert_eq!(chart.dates.len(), OVERVIEW_DAYS);
                assert_eq!(chart.dates[0], "2026-07-24");
            }
            other => panic!("expected overview chart, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_advanced_section_composition() {
        let service = DashboardService::new(Arc::new(FixedSource));
        let view = service
            .section_view(Section::Advanced, 30, 10)
            .await
            .unwrap();

        let ids: Vec<&str> = view.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["scatter", "network", "sankey"]);
    }

    #[test]
    fn test_section_round_trips_through_str() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
        assert!("unknown".parse::<Section>().is_err());
    }
}
