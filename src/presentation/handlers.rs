// HTTP request handlers
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::dashboard_service::{Section, SectionView};
use crate::domain::records::{
    AnalyticsPayload, CategoryRecord, GaugeRecord, GeoRecord, NetworkData, ScatterRecord,
    TimeSeriesRecord,
};
use crate::presentation::app_state::AppState;
use crate::presentation::error::{ApiError, ApiResult};

#[derive(Deserialize)]
pub struct RangeQuery {
    pub days: Option<u32>,
}

#[derive(Deserialize)]
pub struct SampleQuery {
    pub samples: Option<usize>,
}

#[derive(Deserialize)]
pub struct SnapshotQuery {
    pub days: Option<u32>,
    pub samples: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Endpoint index at the API root
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "message": "analytics data API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "time-series": "/api/data/time-series?days={days}",
            "categories": "/api/data/categories",
            "geo": "/api/data/geo",
            "scatter": "/api/data/scatter?samples={samples}",
            "network": "/api/data/network",
            "gauge": "/api/data/gauge",
            "all": "/api/data/all",
            "charts": "/api/charts/{section}?days={days}",
        },
    }))
}

pub async fn time_series_data(
    Query(query): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TimeSeriesRecord>>> {
    let days = query.days.unwrap_or(state.defaults.days);
    Ok(Json(state.source.time_series(days).await?))
}

pub async fn category_data(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryRecord>>> {
    Ok(Json(state.source.categories().await?))
}

pub async fn geo_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GeoRecord>>> {
    Ok(Json(state.source.geo().await?))
}

pub async fn scatter_data(
    Query(query): Query<SampleQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ScatterRecord>>> {
    let samples = query.samples.unwrap_or(state.defaults.samples);
    Ok(Json(state.source.scatter(samples).await?))
}

pub async fn network_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<NetworkData>> {
    Ok(Json(state.source.network().await?))
}

pub async fn gauge_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GaugeRecord>>> {
    Ok(Json(state.source.gauges().await?))
}

/// All six collections in one payload
pub async fn all_data(
    Query(query): Query<SnapshotQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AnalyticsPayload>> {
    let days = query.days.unwrap_or(state.defaults.days);
    let samples = query.samples.unwrap_or(state.defaults.samples);
    Ok(Json(state.source.snapshot(days, samples).await?))
}

/// Shaped chart inputs for one dashboard section
pub async fn section_charts(
    Path(section): Path<String>,
    Query(query): Query<SnapshotQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SectionView>> {
    let section: Section = section
        .parse()
        .map_err(|_| ApiError::UnknownSection(section))?;

    let days = query.days.unwrap_or(state.defaults.days);
    let samples = query.samples.unwrap_or(state.defaults.samples);
    let view = state.dashboard.section_view(section, days, samples).await?;
    Ok(Json(view))
}
