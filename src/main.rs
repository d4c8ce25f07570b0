//! Axie Sales - Main Entry Point
//!
//! Headless run of the sales screen: mounts it against the analytics API,
//! waits for the initial loads and logs what came back.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use axie_sales::FilterScreenController;
use axie_sales::domain::config::{AppConfig, LogConfig};
use axie_sales::eventing::ScreenEvent;
use axie_sales::helpers::get_or_create_data_dir;
use axie_sales::services::{HttpDataService, ServiceHub, runtime_handle};
use axie_sales::utils::config_store::load_app_config;
use axie_sales::utils::format::format_eth;

const LOG_FILE_PREFIX: &str = "axie-sales.log";

/// Records listed in the startup summary
const SUMMARY_RECORDS: usize = 5;

fn main() -> anyhow::Result<()> {
    let config = load_app_config().context("loading config")?;
    let _guard = init_tracing(&config.log)?;

    tracing::info!("Starting Axie Sales against {}", config.api.base_url);

    let controller = run(&config)?;
    log_summary(&controller);

    Ok(())
}

/// Console logging plus an optional daily file under the data directory.
///
/// `RUST_LOG` wins over the configured level. The returned guard flushes the
/// file writer on drop.
fn init_tracing(log: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&log.level).with_context(|| format!("log level {:?}", log.level))?,
    };

    let (file_layer, guard) = if log.file {
        let dir = get_or_create_data_dir()?;
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(fmt::time::LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Mount the screen and pump service events until the initial loads settle
fn run(config: &AppConfig) -> anyhow::Result<FilterScreenController> {
    let service = Arc::new(HttpDataService::new(&config.api)?);
    let hub = ServiceHub::new(service, runtime_handle()?);
    let mut controller = FilterScreenController::new(hub, &config.sync);
    let events = controller.subscribe();

    controller.mount();

    let deadline = Instant::now() + config.api.timeout() + Duration::from_secs(1);
    while controller.is_busy() && Instant::now() < deadline {
        controller.wait_and_process(Duration::from_millis(200));
    }
    if controller.is_busy() {
        tracing::warn!("Initial loads still pending after {:?}", config.api.timeout());
    }

    for event in events.try_iter() {
        if let ScreenEvent::Error { message } = event {
            tracing::warn!("Load failed: {}", message);
        }
    }

    controller.unmount();
    Ok(controller)
}

fn log_summary(controller: &FilterScreenController) {
    let overview = controller.overview();
    tracing::info!(
        "Overview: {} sales, {} ETH volume, {} ETH average, {} chart buckets",
        overview.total_sales,
        format_eth(overview.total_volume_eth),
        format_eth(overview.avg_price_eth),
        overview.chart.len()
    );
    tracing::info!(
        "Page {} of {}: {} records",
        controller.page(),
        controller.total_pages(),
        controller.list().len()
    );

    for record in controller.list().iter().take(SUMMARY_RECORDS) {
        tracing::info!(
            "  #{} sold {} for {} ETH (tx {})",
            record.axie_id_text(),
            record.sold_at(),
            format_eth(record.price_eth),
            record.short_tx_hash()
        );
    }

    let attributes = controller.search_parts("").count();
    tracing::info!("{} part attributes selectable", attributes);

    if let Some(error) = controller.last_error() {
        tracing::error!("Last error: {}", error);
    }
}
