// Domain layer - Record and chart input models
pub mod chart;
pub mod records;
