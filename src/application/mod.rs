// Application layer - Shaping, orchestration, and the upstream source seam
pub mod analytics_source;
pub mod dashboard_service;
pub mod shaper;
pub mod view;
