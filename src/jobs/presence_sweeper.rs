// ==================== PRESENCE SWEEPER ====================
// Background job that flips employees to offline once their heartbeat goes
// stale. The dashboard's location view polls every 15-30 s; the sweeper runs
// on a 30 s interval with a 90 s staleness threshold.

use crate::{database::MongoDB, services::employee_service};
use tokio::time::{interval, Duration};

const SWEEP_INTERVAL_SECS: u64 = 30;

/// Starts the sweeper. Runs once immediately so a restart does not leave
/// phantom "online" employees, then every 30 seconds.
pub async fn start_presence_sweeper(db: MongoDB) {
    log::info!(
        "📡 Starting presence sweeper (every {} s, stale after {} s)",
        SWEEP_INTERVAL_SECS,
        employee_service::PRESENCE_STALE_SECS
    );

    tokio::spawn(async move {
        log::info!("🚀 Running initial presence sweep on startup...");
        match employee_service::sweep_stale_presence(&db).await {
            Ok(count) => {
                if count > 0 {
                    log::info!("✅ Startup sweep: {} employees marked offline", count);
                }
            }
            Err(e) => log::error!("❌ Startup presence sweep failed: {}", e),
        }

        let mut interval = interval(Duration::from_secs(SWEEP_INTERVAL_SECS));

        loop {
            interval.tick().await;

            match employee_service::sweep_stale_presence(&db).await {
                Ok(count) => {
                    if count > 0 {
                        log::debug!("📡 Presence sweep: {} employees marked offline", count);
                    }
                }
                Err(e) => log::error!("❌ Presence sweep failed: {}", e),
            }
        }
    });

    log::info!("✅ Presence sweeper started successfully");
}
