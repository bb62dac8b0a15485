// Synthetic analytics source - generates the six record collections with
// plausible shapes: seasonal daily metrics, skewed category totals, Gaussian
// scatter blobs, a small random relationship graph, and utilization gauges.
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::application::analytics_source::AnalyticsSource;
use crate::domain::records::{
    AnalyticsPayload, CategoryRecord, GaugeRecord, GeoRecord, GraphLink, GraphNode, NetworkData,
    ScatterRecord, TimeSeriesRecord,
};

const CATEGORIES: [&str; 7] = [
    "Electronics",
    "Clothing",
    "Food",
    "Home",
    "Books",
    "Health",
    "Toys",
];

const REGIONS: [&str; 31] = [
    "Beijing",
    "Shanghai",
    "Guangdong",
    "Jiangsu",
    "Zhejiang",
    "Shandong",
    "Henan",
    "Sichuan",
    "Hubei",
    "Hunan",
    "Hebei",
    "Fujian",
    "Shaanxi",
    "Liaoning",
    "Jiangxi",
    "Anhui",
    "Heilongjiang",
    "Guangxi",
    "Inner Mongolia",
    "Shanxi",
    "Jilin",
    "Yunnan",
    "Guizhou",
    "Chongqing",
    "Tianjin",
    "Gansu",
    "Xinjiang",
    "Qinghai",
    "Tibet",
    "Ningxia",
    "Hainan",
];

/// Gauge metric names with their alert targets. Battery is the odd one out:
/// its target is the full scale.
const GAUGE_METRICS: [(&str, f64); 5] = [
    ("CPU Usage", 80.0),
    ("Memory Usage", 80.0),
    ("Disk Usage", 80.0),
    ("Network Load", 80.0),
    ("Battery Level", 100.0),
];

const SCATTER_CENTERS: [(f64, f64); 4] = [(-6.0, -7.0), (4.5, 2.0), (-2.5, 9.0), (8.0, -5.5)];

const NODE_COUNT: usize = 20;
const LINK_COUNT: usize = 30;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct SampleDataSource;

impl SampleDataSource {
    pub fn new() -> Self {
        Self
    }

    fn generate_time_series(days: u32) -> Vec<TimeSeriesRecord> {
        let mut rng = rand::thread_rng();
        let start = Utc::now().date_naive() - Duration::days(days as i64);

        (0..=days)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                let phase = i as f64;
                TimeSeriesRecord {
                    date: date.format("%Y-%m-%d").to_string(),
                    sales: round2(
                        rng.gen_range(100..500) as f64 + (phase / 7.0).sin() * 50.0,
                    ),
                    traffic: round2(
                        rng.gen_range(1000..3000) as f64 + (phase / 7.0).sin() * 300.0,
                    ),
                    users: round2(
                        rng.gen_range(500..1500) as f64 + (phase / 14.0).cos() * 200.0,
                    ),
                }
            })
            .collect()
    }

    fn generate_categories() -> Vec<CategoryRecord> {
        let mut rng = rand::thread_rng();

        CATEGORIES
            .iter()
            .map(|&category| {
                let sales = round2(rng.gen_range(10_000.0..100_000.0));
                let profit = round2(sales * rng.gen_range(0.1..0.3));
                let customers = (sales / rng.gen_range(50.0..150.0)) as u32;
                CategoryRecord {
                    category: category.to_string(),
                    sales_amount: sales,
                    profit,
                    customer_count: customers,
                }
            })
            .collect()
    }

    fn generate_geo() -> Vec<GeoRecord> {
        let mut rng = rand::thread_rng();

        REGIONS
            .iter()
            .map(|&region| GeoRecord {
                region: region.to_string(),
                value: rng.gen_range(100..=1000) as f64,
                gdp: round2(rng.gen_range(1000.0..10_000.0)),
                population: rng.gen_range(500..=5000) * 10_000,
            })
            .collect()
    }

    fn generate_scatter(samples: usize) -> Vec<ScatterRecord> {
        let mut rng = rand::thread_rng();

        (0..samples)
            .map(|i| {
                let blob = i % SCATTER_CENTERS.len();
                let (cx, cy) = SCATTER_CENTERS[blob];
                let dx: f64 = rng.sample(StandardNormal);
                let dy: f64 = rng.sample(StandardNormal);
                ScatterRecord {
                    x: cx + dx,
                    y: cy + dy,
                    cluster: blob as u32,
                }
            })
            .collect()
    }

    fn generate_network() -> NetworkData {
        let mut rng = rand::thread_rng();

        let nodes: Vec<GraphNode> = (0..NODE_COUNT)
            .map(|i| {
                let size = rng.gen_range(20..=50) as f64;
                GraphNode {
                    id: format!("node{i}"),
                    name: format!("Node {i}"),
                    category: rng.gen_range(0..=3),
                    value: size,
                    symbol_size: size,
                }
            })
            .collect();

        let links = (0..LINK_COUNT)
            .map(|_| {
                let source = rng.gen_range(0..nodes.len());
                let mut target = rng.gen_range(0..nodes.len());
                while target == source {
                    target = rng.gen_range(0..nodes.len());
                }
                GraphLink {
                    source: format!("node{source}"),
                    target: format!("node{target}"),
                    value: rng.gen_range(1..=10) as f64,
                }
            })
            .collect();

        NetworkData { nodes, links }
    }

    fn generate_gauges() -> Vec<GaugeRecord> {
        let mut rng = rand::thread_rng();

        GAUGE_METRICS
            .iter()
            .map(|&(name, target)| {
                let value = if target >= 100.0 {
                    rng.gen_range(10..=100)
                } else {
                    rng.gen_range(30..=95)
                };
                GaugeRecord {
                    name: name.to_string(),
                    value: value as f64,
                    target,
                }
            })
            .collect()
    }
}

impl Default for SampleDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSource for SampleDataSource {
    async fn time_series(&self, days: u32) -> anyhow::Result<Vec<TimeSeriesRecord>> {
        Ok(Self::generate_time_series(days))
    }

    async fn categories(&self) -> anyhow::Result<Vec<CategoryRecord>> {
        Ok(Self::generate_categories())
    }

    async fn geo(&self) -> anyhow::Result<Vec<GeoRecord>> {
        Ok(Self::generate_geo())
    }

    async fn scatter(&self, samples: usize) -> anyhow::Result<Vec<ScatterRecord>> {
        Ok(Self::generate_scatter(samples))
    }

    async fn network(&self) -> anyhow::Result<NetworkData> {
        Ok(Self::generate_network())
    }

    async fn gauges(&self) -> anyhow::Result<Vec<GaugeRecord>> {
        Ok(Self::generate_gauges())
    }

    async fn snapshot(&self, days: u32, samples: usize) -> anyhow::Result<AnalyticsPayload> {
        Ok(AnalyticsPayload {
            time_series: Self::generate_time_series(days),
            categories: Self::generate_categories(),
            geo: Self::generate_geo(),
            scatter: Self::generate_scatter(samples),
            network: Self::generate_network(),
            gauge: Self::generate_gauges(),
        })
    }
}
