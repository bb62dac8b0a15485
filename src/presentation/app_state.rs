// Application state for HTTP handlers
use std::sync::Arc;

use crate::application::analytics_source::AnalyticsSource;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::SourceSettings;

pub struct AppState {
    pub source: Arc<dyn AnalyticsSource>,
    pub dashboard: DashboardService,
    /// Defaults applied when a request omits `days` or `samples`
    pub defaults: SourceSettings,
}
