// Main entry point - Dependency injection, server setup, and export mode
mod application;
mod cli;
mod domain;
mod infrastructure;
mod presentation;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::analytics_source::AnalyticsSource;
use crate::application::dashboard_service::{DashboardService, Section};
use crate::application::view::ViewController;
use crate::cli::{Cli, Command};
use crate::infrastructure::config::{load_settings, Settings};
use crate::infrastructure::generator::SampleDataSource;
use crate::infrastructure::http_source::HttpAnalyticsSource;
use crate::infrastructure::json_sink::JsonFileSink;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    all_data, api_index, category_data, gauge_data, geo_data, health_check, network_data,
    scatter_data, section_charts, time_series_data,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings()?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve(settings, port).await,
        Command::Export {
            out,
            days,
            samples,
            endpoint,
        } => export(settings, out, days, samples, endpoint).await,
    }
}

async fn serve(settings: Settings, port_override: Option<u16>) -> anyhow::Result<()> {
    let source: Arc<dyn AnalyticsSource> = Arc::new(SampleDataSource::new());
    let dashboard = DashboardService::new(source.clone());

    let state = Arc::new(AppState {
        source,
        dashboard,
        defaults: settings.source.clone(),
    });

    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api", get(api_index))
        .route("/api/data/time-series", get(time_series_data))
        .route("/api/data/categories", get(category_data))
        .route("/api/data/geo", get(geo_data))
        .route("/api/data/scatter", get(scatter_data))
        .route("/api/data/network", get(network_data))
        .route("/api/data/gauge", get(gauge_data))
        .route("/api/data/all", get(all_data))
        .route("/api/charts/:section", get(section_charts))
        .layer(TraceLayer::new_for_http())
        // the dashboard frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port = port_override.unwrap_or(settings.server.port);
    let addr: SocketAddr = format!("{}:{}", settings.server.host, port).parse()?;
    tracing::info!(%addr, "starting analytics-dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

/// Headless orchestration pass: for every section, fetch records, run the
/// shaping functions, and mount the results into the JSON file sink through
/// the scoped view controller.
async fn export(
    settings: Settings,
    out: Option<PathBuf>,
    days: Option<u32>,
    samples: Option<usize>,
    endpoint: Option<String>,
) -> anyhow::Result<()> {
    let source: Arc<dyn AnalyticsSource> = match endpoint.or(settings.source.endpoint) {
        Some(url) => {
            tracing::info!(%url, "fetching records from remote data API");
            Arc::new(HttpAnalyticsSource::new(url))
        }
        None => Arc::new(SampleDataSource::new()),
    };

    let dashboard = DashboardService::new(source);
    let out_dir = out.unwrap_or_else(|| PathBuf::from(&settings.export.out_dir));
    let sink = Arc::new(JsonFileSink::new(out_dir.clone()));
    let mut controller = ViewController::new(sink);

    let days = days.unwrap_or(settings.source.days);
    let samples = samples.unwrap_or(settings.source.samples);

    for section in Section::ALL {
        let view = dashboard.section_view(section, days, samples).await?;
        controller.activate(&view)?;
        tracing::info!(%section, charts = view.charts.len(), "section exported");
    }
    controller.teardown();

    tracing::info!(out = %out_dir.display(), "export complete");
    Ok(())
}
