// JSON file render sink - writes each mounted chart input to disk as the
// hand-off artifact for an external renderer.
//
// Layout:
//
// {out}/dashboard/gauge.json
// {out}/dashboard/sales-overview.json
// {out}/{section}/{chart-id}.json
use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::application::dashboard_service::Section;
use crate::application::view::{ChartHandle, RenderSink};
use crate::domain::chart::ChartView;

pub struct JsonFileSink {
    out_dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl RenderSink for JsonFileSink {
    fn mount(&self, section: Section, chart: &ChartView) -> anyhow::Result<ChartHandle> {
        let section_dir = self.out_dir.join(section.as_str());
        fs::create_dir_all(&section_dir)
            .with_context(|| format!("failed to create {}", section_dir.display()))?;

        let path = section_dir.join(format!("{}.json", chart.id));
        let body = serde_json::to_vec_pretty(chart)?;
        fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!(chart = %chart.id, path = %path.display(), "chart written");
        Ok(ChartHandle {
            section,
            chart_id: chart.id.clone(),
        })
    }

    // Releasing ends this program's interest in the mounted chart; the
    // exported file stays for the consumer.
    fn release(&self, handle: &ChartHandle) {
        tracing::debug!(chart = %handle.chart_id, section = %handle.section, "chart released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartInput, PieChart, PieSlice};

    #[test]
    fn test_mount_writes_one_file_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path());

        let chart = ChartView::new(
            "category-pie",
            ChartInput::Pie(PieChart {
                slices: vec![PieSlice {
                    name: "Books".to_string(),
                    value: 12000.0,
                }],
            }),
        );

        let handle = sink.mount(Section::Categories, &chart).unwrap();
        let path = dir.path().join("categories/category-pie.json");
        assert!(path.exists());

        let body: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(body["id"], "category-pie");
        assert_eq!(body["chart"]["kind"], "pie");

        // release keeps the exported artifact in place
        sink.release(&handle);
        assert!(path.exists());
    }
}
