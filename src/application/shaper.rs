// Chart shaping - flat record collections to per-chart input structures.
// Every function here is pure: it consumes its input eagerly and returns a
// fully materialized chart input. Inputs are assumed well formed and
// non-empty; there is no validation layer.
use std::collections::HashMap;

use crate::domain::chart::{
    BarChart, FlowChart, FlowLink, GaugeChart, GaugeEntry, GaugePalette, GraphChart, MapChart,
    MapEntry, MetricSeries, OverviewChart, PieChart, PieSlice, RadarChart, RadarEntry,
    RadarIndicator, ScatterChart, ScatterGroup, SeriesValue, TimeSeriesChart, TrendChart,
};
use crate::domain::records::{
    CategoryRecord, GaugeRecord, GeoRecord, NetworkData, ScatterRecord, TimeSeriesRecord,
};

pub const MOVING_AVERAGE_WINDOW: usize = 7;
pub const MAX_FLOW_LINKS: usize = 15;
pub const FLOW_VALUE_SCALE: f64 = 10.0;
pub const MAX_GAUGES: usize = 3;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Trailing arithmetic mean over a fixed window. The first `window - 1`
/// positions have no full window behind them and carry the sentinel.
pub fn moving_average(values: &[f64], window: usize) -> Vec<SeriesValue> {
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                SeriesValue::Missing
            } else {
                let sum: f64 = values[i + 1 - window..=i].iter().sum();
                SeriesValue::Number(round2(sum / window as f64))
            }
        })
        .collect()
}

/// Change relative to the previous value, in percent. The first position has
/// no predecessor; a zero base would divide by zero. Both carry the sentinel.
pub fn percent_change(values: &[f64]) -> Vec<SeriesValue> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if i == 0 {
                return SeriesValue::Missing;
            }
            let previous = values[i - 1];
            if previous == 0.0 {
                return SeriesValue::Missing;
            }
            SeriesValue::Number(round2((value - previous) / previous * 100.0))
        })
        .collect()
}

/// Partition labeled points into per-label groups, preserving the first-seen
/// order of labels.
pub fn partition_by_label<I>(points: I) -> Vec<ScatterGroup>
where
    I: IntoIterator<Item = (String, [f64; 2])>,
{
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<[f64; 2]>> = HashMap::new();

    for (label, point) in points {
        if !grouped.contains_key(&label) {
            order.push(label.clone());
        }
        grouped.entry(label).or_default().push(point);
    }

    order
        .into_iter()
        .map(|name| {
            let points = grouped.remove(&name).unwrap_or_default();
            ScatterGroup { name, points }
        })
        .collect()
}

fn axis_ceiling(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

pub fn time_series_chart(records: &[TimeSeriesRecord]) -> TimeSeriesChart {
    let dates = records.iter().map(|r| r.date.clone()).collect();
    let series = vec![
        MetricSeries {
            name: "Sales".to_string(),
            values: records.iter().map(|r| r.sales).collect(),
        },
        MetricSeries {
            name: "Traffic".to_string(),
            values: records.iter().map(|r| r.traffic).collect(),
        },
        MetricSeries {
            name: "Users".to_string(),
            values: records.iter().map(|r| r.users).collect(),
        },
    ];
    TimeSeriesChart { dates, series }
}

pub fn trend_chart(records: &[TimeSeriesRecord]) -> TrendChart {
    let sales: Vec<f64> = records.iter().map(|r| r.sales).collect();
    let moving_average = moving_average(&sales, MOVING_AVERAGE_WINDOW);
    TrendChart {
        dates: records.iter().map(|r| r.date.clone()).collect(),
        sales,
        moving_average,
    }
}

pub fn overview_chart(records: &[TimeSeriesRecord]) -> OverviewChart {
    let sales: Vec<f64> = records.iter().map(|r| r.sales).collect();
    let change_percent = percent_change(&sales);
    OverviewChart {
        dates: records.iter().map(|r| r.date.clone()).collect(),
        sales,
        change_percent,
    }
}

pub fn category_pie(records: &[CategoryRecord]) -> PieChart {
    let slices = records
        .iter()
        .map(|r| PieSlice {
            name: r.category.clone(),
            value: r.sales_amount,
        })
        .collect();
    PieChart { slices }
}

pub fn category_bar(records: &[CategoryRecord]) -> BarChart {
    let categories = records.iter().map(|r| r.category.clone()).collect();
    let series = vec![
        MetricSeries {
            name: "Sales".to_string(),
            values: records.iter().map(|r| r.sales_amount).collect(),
        },
        MetricSeries {
            name: "Profit".to_string(),
            values: records.iter().map(|r| r.profit).collect(),
        },
        MetricSeries {
            name: "Customers".to_string(),
            values: records.iter().map(|r| r.customer_count as f64).collect(),
        },
    ];
    BarChart { categories, series }
}

pub fn radar_chart(records: &[CategoryRecord]) -> RadarChart {
    let indicators = vec![
        RadarIndicator {
            name: "Sales".to_string(),
            max: axis_ceiling(records.iter().map(|r| r.sales_amount)),
        },
        RadarIndicator {
            name: "Profit".to_string(),
            max: axis_ceiling(records.iter().map(|r| r.profit)),
        },
        RadarIndicator {
            name: "Customers".to_string(),
            max: axis_ceiling(records.iter().map(|r| r.customer_count as f64)),
        },
    ];
    let entries = records
        .iter()
        .map(|r| RadarEntry {
            name: r.category.clone(),
            values: [r.sales_amount, r.profit, r.customer_count as f64],
        })
        .collect();
    RadarChart {
        indicators,
        entries,
    }
}

pub fn map_chart(records: &[GeoRecord]) -> MapChart {
    let entries = records
        .iter()
        .map(|r| MapEntry {
            name: r.region.clone(),
            value: r.value,
            gdp: r.gdp,
            population: r.population,
        })
        .collect();
    MapChart { entries }
}

pub fn scatter_chart(records: &[ScatterRecord]) -> ScatterChart {
    let groups = partition_by_label(
        records
            .iter()
            .map(|r| (format!("Cluster {}", r.cluster), [r.x, r.y])),
    );
    ScatterChart { groups }
}

pub fn graph_chart(network: &NetworkData) -> GraphChart {
    let group_count = network
        .nodes
        .iter()
        .map(|n| n.category + 1)
        .max()
        .unwrap_or(0);
    let categories = (0..group_count).map(|i| format!("Group {i}")).collect();
    GraphChart {
        categories,
        nodes: network.nodes.clone(),
        links: network.links.clone(),
    }
}

/// Reduce the relationship graph to a flow chart: the first `MAX_FLOW_LINKS`
/// edges only, endpoint ids resolved to display names, weights scaled so the
/// flow widths stay legible. Edges with an unresolvable endpoint are dropped.
pub fn flow_chart(network: &NetworkData) -> FlowChart {
    let names: HashMap<&str, &str> = network
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.name.as_str()))
        .collect();

    let links = network
        .links
        .iter()
        .take(MAX_FLOW_LINKS)
        .filter_map(|link| {
            let source = names.get(link.source.as_str())?;
            let target = names.get(link.target.as_str())?;
            Some(FlowLink {
                source: (*source).to_string(),
                target: (*target).to_string(),
                value: link.value * FLOW_VALUE_SCALE,
            })
        })
        .collect();

    FlowChart {
        nodes: network.nodes.iter().map(|n| n.name.clone()).collect(),
        links,
    }
}

pub fn gauge_chart(records: &[GaugeRecord]) -> GaugeChart {
    let entries = records
        .iter()
        .take(MAX_GAUGES)
        .map(|r| {
            let palette = if r.value > r.target {
                GaugePalette::OverTarget
            } else {
                GaugePalette::WithinTarget
            };
            GaugeEntry {
                name: r.name.clone(),
                value: r.value,
                target: r.target,
                palette,
                stops: palette.stops(),
            }
        })
        .collect();
    GaugeChart {
        min: 0.0,
        max: 100.0,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{GraphLink, GraphNode};

    fn day(date: &str, sales: f64) -> TimeSeriesRecord {
        TimeSeriesRecord {
            date: date.to_string(),
            sales,
            traffic: sales * 10.0,
            users: sales * 2.0,
        }
    }

    fn category(name: &str, sales: f64, profit: f64, customers: u32) -> CategoryRecord {
        CategoryRecord {
            category: name.to_string(),
            sales_amount: sales,
            profit,
            customer_count: customers,
        }
    }

    fn network(node_count: usize, link_count: usize) -> NetworkData {
        let nodes = (0..node_count)
            .map(|i| GraphNode {
                id: format!("node{i}"),
                name: format!("Node {i}"),
                category: (i % 4) as u32,
                value: 30.0,
                symbol_size: 30.0,
            })
            .collect();
        let links = (0..link_count)
            .map(|i| GraphLink {
                source: format!("node{}", i % node_count),
                target: format!("node{}", (i + 1) % node_count),
                value: (i + 1) as f64,
            })
            .collect();
        NetworkData { nodes, links }
    }

    #[test]
    fn test_moving_average_warmup_then_window() {
        let values: Vec<f64> = (1..=8).map(f64::from).collect();
        let averaged = moving_average(&values, 7);

        assert_eq!(averaged.len(), values.len());
        for entry in &averaged[..6] {
            assert_eq!(*entry, SeriesValue::Missing);
        }
        // mean of 1..=7 and of 2..=8
        assert_eq!(averaged[6], SeriesValue::Number(4.0));
        assert_eq!(averaged[7], SeriesValue::Number(5.0));
    }

    #[test]
    fn test_moving_average_rounds_to_two_decimals() {
        let values = [1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0];
        let averaged = moving_average(&values, 7);
        // 13 / 7 = 1.857142...
        assert_eq!(averaged[6], SeriesValue::Number(1.86));
    }

    #[test]
    fn test_percent_change_basic() {
        let changes = percent_change(&[100.0, 110.0, 99.0]);
        assert_eq!(
            changes,
            vec![
                SeriesValue::Missing,
                SeriesValue::Number(10.0),
                SeriesValue::Number(-10.0),
            ]
        );
    }

    #[test]
    fn test_percent_change_zero_base_is_sentinel() {
        let changes = percent_change(&[0.0, 5.0, 10.0]);
        assert_eq!(changes[1], SeriesValue::Missing);
        assert_eq!(changes[2], SeriesValue::Number(100.0));
    }

    #[test]
    fn test_series_extraction_is_index_aligned() {
        let records: Vec<TimeSeriesRecord> =
            (0..12).map(|i| day(&format!("2026-07-{:02}", i + 1), 100.0 + i as f64)).collect();
        let chart = time_series_chart(&records);

        assert_eq!(chart.dates.len(), records.len());
        assert_eq!(chart.series.len(), 3);
        for series in &chart.series {
            assert_eq!(series.values.len(), records.len());
        }
        assert_eq!(chart.series[0].values[3], 103.0);
    }

    #[test]
    fn test_trend_chart_aligns_average_with_sales() {
        let records: Vec<TimeSeriesRecord> =
            (0..10).map(|i| day(&format!("2026-07-{:02}", i + 1), 200.0)).collect();
        let chart = trend_chart(&records);

        assert_eq!(chart.moving_average.len(), chart.sales.len());
        assert_eq!(chart.moving_average[5], SeriesValue::Missing);
        assert_eq!(chart.moving_average[6], SeriesValue::Number(200.0));
    }

    #[test]
    fn test_partition_preserves_first_seen_order() {
        let groups = partition_by_label(vec![
            ("B".to_string(), [1.0, 1.0]),
            ("A".to_string(), [2.0, 2.0]),
            ("B".to_string(), [3.0, 3.0]),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "B");
        assert_eq!(groups[0].points, vec![[1.0, 1.0], [3.0, 3.0]]);
        assert_eq!(groups[1].name, "A");
        assert_eq!(groups[1].points, vec![[2.0, 2.0]]);
    }

    #[test]
    fn test_scatter_chart_groups_by_cluster() {
        let records = vec![
            ScatterRecord { x: 0.0, y: 0.0, cluster: 1 },
            ScatterRecord { x: 1.0, y: 1.0, cluster: 0 },
            ScatterRecord { x: 2.0, y: 2.0, cluster: 1 },
        ];
        let chart = scatter_chart(&records);

        assert_eq!(chart.groups[0].name, "Cluster 1");
        assert_eq!(chart.groups[0].points.len(), 2);
        assert_eq!(chart.groups[1].name, "Cluster 0");
    }

    #[test]
    fn test_radar_ceiling_is_per_indicator_maximum() {
        let records = vec![
            category("A", 10.0, 3.0, 7),
            category("B", 30.0, 1.0, 2),
            category("C", 20.0, 2.0, 9),
        ];
        let chart = radar_chart(&records);

        assert_eq!(chart.indicators[0].max, 30.0);
        assert_eq!(chart.indicators[1].max, 3.0);
        assert_eq!(chart.indicators[2].max, 9.0);
        // raw values pass through
        assert_eq!(chart.entries[1].values, [30.0, 1.0, 2.0]);
    }

    #[test]
    fn test_flow_truncates_and_scales() {
        let data = network(20, 20);
        let chart = flow_chart(&data);

        assert_eq!(chart.links.len(), MAX_FLOW_LINKS);
        assert_eq!(chart.links[0].source, "Node 0");
        assert_eq!(chart.links[0].target, "Node 1");
        assert_eq!(chart.links[0].value, 10.0);
        assert_eq!(chart.links[14].value, 150.0);
    }

    #[test]
    fn test_flow_drops_unresolvable_edges() {
        let mut data = network(5, 3);
        data.links[1].target = "missing".to_string();
        let chart = flow_chart(&data);

        assert_eq!(chart.links.len(), 2);
    }

    #[test]
    fn test_gauge_truncates_and_tags_palette() {
        let records = vec![
            GaugeRecord { name: "CPU Usage".to_string(), value: 90.0, target: 80.0 },
            GaugeRecord { name: "Memory Usage".to_string(), value: 40.0, target: 80.0 },
            GaugeRecord { name: "Disk Usage".to_string(), value: 81.0, target: 80.0 },
            GaugeRecord { name: "Network Load".to_string(), value: 50.0, target: 80.0 },
            GaugeRecord { name: "Battery Level".to_string(), value: 95.0, target: 100.0 },
        ];
        let chart = gauge_chart(&records);

        assert_eq!(chart.entries.len(), MAX_GAUGES);
        assert_eq!(chart.entries[0].palette, GaugePalette::OverTarget);
        assert_eq!(chart.entries[1].palette, GaugePalette::WithinTarget);
        assert_eq!(chart.entries[2].palette, GaugePalette::OverTarget);
        assert_eq!((chart.min, chart.max), (0.0, 100.0));
    }

    #[test]
    fn test_graph_chart_covers_category_range() {
        let data = network(6, 4);
        let chart = graph_chart(&data);

        assert_eq!(chart.categories, vec!["Group 0", "Group 1", "Group 2", "Group 3"]);
        assert_eq!(chart.nodes.len(), 6);
        assert_eq!(chart.links.len(), 4);
    }

    #[test]
    fn test_category_bar_parallel_series() {
        let records = vec![category("A", 10.0, 2.0, 5), category("B", 20.0, 4.0, 8)];
        let chart = category_bar(&records);

        assert_eq!(chart.categories, vec!["A", "B"]);
        assert_eq!(chart.series[1].values, vec![2.0, 4.0]);
        assert_eq!(chart.series[2].values, vec![5.0, 8.0]);
    }
}
