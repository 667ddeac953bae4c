mod config;
mod core;
mod models;
mod services;

use crate::config::Settings;
use crate::core::compare;
use crate::services::ProfileStore;
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Matri Algo compatibility service...");

    let mut args = std::env::args().skip(1);
    let (viewer_id, target_id) = match (args.next(), args.next()) {
        (Some(viewer), Some(target)) => (viewer, target),
        _ => {
            error!("Usage: matri-algo <viewer-matri-id> <target-matri-id>");
            std::process::exit(2);
        }
    };

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the profile store
    let store = ProfileStore::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
        settings.database.idle_timeout_secs,
    )
    .await
    .unwrap_or_else(|e| {
        error!("Failed to connect to PostgreSQL: {}", e);
        panic!("PostgreSQL connection error: {}", e);
    });

    if !store.health_check().await.unwrap_or(false) {
        error!("PostgreSQL health check failed");
    }

    let comparison = match run(&store, &viewer_id, &target_id).await {
        Ok(comparison) => comparison,
        Err(e) => {
            error!("Comparison failed: {}", e);
            std::process::exit(1);
        }
    };

    match (&comparison.target_report, &comparison.viewer_report) {
        (None, None) => info!("Neither profile has partner preferences on record"),
        (target, viewer) => {
            if let Some(report) = target {
                log_direction(&comparison.target_matri_id, &comparison.viewer_matri_id, report);
            }
            if let Some(report) = viewer {
                log_direction(&comparison.viewer_matri_id, &comparison.target_matri_id, report);
            }
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&comparison).expect("comparison serializes")
    );

    Ok(())
}

fn log_direction(candidate_id: &str, prefs_owner_id: &str, report: &models::MatchReport) {
    // A 0/0 report means no criteria were specified, not a zero match.
    if report.is_vacuous() {
        info!(
            "{} has a preference record with no criteria to evaluate {} against",
            prefs_owner_id, candidate_id
        );
    } else {
        info!(
            "{} against {}'s preferences: {}/{}",
            candidate_id, prefs_owner_id, report.score, report.total
        );
    }
}

async fn run(
    store: &ProfileStore,
    viewer_id: &str,
    target_id: &str,
) -> Result<models::MatchComparison, services::PostgresError> {
    let viewer = store.get_profile(viewer_id).await?;
    let target = store.get_profile(target_id).await?;

    let viewer_prefs = store.get_preferences(viewer_id).await?;
    let target_prefs = store.get_preferences(target_id).await?;

    Ok(compare(
        &viewer,
        viewer_prefs.as_ref(),
        &target,
        target_prefs.as_ref(),
    ))
}
