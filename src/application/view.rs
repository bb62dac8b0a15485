// Scoped chart ownership for the active view. Handles live for exactly one
// activation: activating a section releases every handle of the previous
// section before the new charts are mounted, and teardown releases the rest.
use std::sync::Arc;

use crate::application::dashboard_service::{Section, SectionView};
use crate::domain::chart::ChartView;

/// Token for one mounted chart. Returned by the sink on mount and handed
/// back on release; the controller is its only owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub section: Section,
    pub chart_id: String,
}

/// Seam to the rendering consumer. Mounting hands one shaped chart over;
/// releasing ends this program's interest in it.
pub trait RenderSink: Send + Sync {
    fn mount(&self, section: Section, chart: &ChartView) -> anyhow::Result<ChartHandle>;

    fn release(&self, handle: &ChartHandle);
}

struct ActiveView {
    section: Section,
    handles: Vec<ChartHandle>,
}

pub struct ViewController {
    sink: Arc<dyn RenderSink>,
    active: Option<ActiveView>,
}

impl ViewController {
    pub fn new(sink: Arc<dyn RenderSink>) -> Self {
        Self { sink, active: None }
    }

    pub fn active_section(&self) -> Option<Section> {
        self.active.as_ref().map(|view| view.section)
    }

    /// Switch to a new view: release the previous section's handles first,
    /// then mount each chart and keep the returned handles for the next
    /// switch or teardown.
    pub fn activate(&mut self, view: &SectionView) -> anyhow::Result<()> {
        self.teardown();

        let mut handles = Vec::with_capacity(view.charts.len());
        for chart in &view.charts {
            handles.push(self.sink.mount(view.section, chart)?);
        }

        tracing::debug!(section = %view.section, charts = handles.len(), "view activated");
        self.active = Some(ActiveView {
            section: view.section,
            handles,
        });
        Ok(())
    }

    /// Release every handle of the active view, if any.
    pub fn teardown(&mut self) {
        if let Some(view) = self.active.take() {
            for handle in &view.handles {
                self.sink.release(handle);
            }
            tracing::debug!(section = %view.section, "view released");
        }
    }
}
