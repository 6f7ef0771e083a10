use anyhow::{Context, Result};
use supabase_connection::SupabaseConnection;
use tracing::{info, warn};

use crate::config::ServiceConfig;

mod config;
mod utils;

/// Main entry point for the Supabase connection health check
///
/// This function performs the following steps:
/// 1. Initializes the pre-run environment (logger and Supabase client)
/// 2. Probes the configured table through the shared client
/// 3. Releases the client and exits
///
/// Configuration errors and unreachable endpoints exit non-zero; a
/// service-level error response from Supabase is logged and tolerated.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    init_pre_run()?;

    info!("Starting the Supabase connection health check");

    let config = ServiceConfig::load_from_env()?;
    let client = SupabaseConnection::client()?;

    let response = client
        .from(&config.probe_table)
        .select("*")
        .exact_count()
        .execute()
        .await
        .context("Probe request could not reach Supabase")?;

    let status = response.status();
    let count = response
        .headers()
        .get("content-range")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if status.is_success() {
        match count {
            Some(range) => info!(
                "Probe of {:?} succeeded with status {} ({})",
                config.probe_table, status, range
            ),
            None => info!(
                "Probe of {:?} succeeded with status {}",
                config.probe_table, status
            ),
        }
    } else {
        warn!(
            "Probe of {:?} answered with status {}",
            config.probe_table, status
        );
    }

    SupabaseConnection::close();
    info!("Connection health check finished");

    Ok(())
}

/// Initializes the pre-run environment
///
/// This function performs the following steps:
/// 1. Sets up the logger
/// 2. Initializes the shared Supabase client
///
/// # Returns
/// * `Result<()>` - Success or error if any step fails
fn init_pre_run() -> Result<()> {
    utils::logger::setup_logger().context("Failed to setup logger")?;

    info!("Initializing the Supabase client");
    SupabaseConnection::init().context("Failed to initialize the Supabase client")?;

    Ok(())
}
