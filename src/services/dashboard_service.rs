use crate::{
    database::MongoDB,
    models::{Application, ServiceDomain},
    utils::cache,
    utils::error::AppError,
};
use chrono::{Datelike, TimeZone, Utc};
use futures::stream::StreamExt;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SUMMARY_CACHE_KEY: &str = "dashboard:summary";
const SUMMARY_CACHE_TTL: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DomainCount {
    pub domain: String,
    pub total: u64,
    pub pending: u64,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardSummary {
    pub applications: Vec<DomainCount>,
    pub applications_total: u64,
    pub pending_total: u64,
    pub employees_total: u64,
    pub users_total: u64,
}

/// Start of the current UTC day as a Unix timestamp.
fn utc_midnight() -> i64 {
    let now = Utc::now();
    Utc.with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| now.timestamp() - (now.timestamp() % 86_400))
}

/// Buckets Unix timestamps into 24 UTC-hour slots relative to `day_start`.
/// Timestamps outside [day_start, day_start + 24h) are ignored.
/// Always returns exactly 24 entries so the dashboard charts get a dense series.
pub fn hourly_buckets(timestamps: &[i64], day_start: i64) -> [u64; 24] {
    let mut buckets = [0u64; 24];
    for &ts in timestamps {
        let offset = ts - day_start;
        if (0..86_400).contains(&offset) {
            buckets[(offset / 3_600) as usize] += 1;
        }
    }
    buckets
}

/// Per-domain counts plus employee/user totals. Cached for 30 s - the dashboard
/// re-fetches on every visit and the counts do not move that fast.
pub async fn summary(db: &MongoDB) -> Result<DashboardSummary, AppError> {
    if let Some(cached) = cache::get_cached(SUMMARY_CACHE_KEY) {
        if let Ok(summary) = serde_json::from_str::<DashboardSummary>(&cached) {
            log::debug!("📊 Dashboard summary served from cache");
            return Ok(summary);
        }
    }

    let applications = db.collection::<Application>("applications");

    let mut domain_counts = Vec::new();
    let mut applications_total = 0u64;
    let mut pending_total = 0u64;

    for domain in ServiceDomain::ALL {
        let base = doc! { "domain": domain.as_str(), "is_deleted": { "$ne": true } };

        let total = applications
            .count_documents(base.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut pending_filter = base;
        pending_filter.insert("status", "PENDING");
        let pending = applications
            .count_documents(pending_filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        applications_total += total;
        pending_total += pending;
        domain_counts.push(DomainCount {
            domain: domain.to_string(),
            total,
            pending,
        });
    }

    let employees_total = db
        .collection::<mongodb::bson::Document>("employees")
        .count_documents(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let users_total = db
        .collection::<mongodb::bson::Document>("users")
        .count_documents(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let summary = DashboardSummary {
        applications: domain_counts,
        applications_total,
        pending_total,
        employees_total,
        users_total,
    };

    if let Ok(json) = serde_json::to_string(&summary) {
        cache::set_cache(SUMMARY_CACHE_KEY.to_string(), json, SUMMARY_CACHE_TTL);
    }

    Ok(summary)
}

/// Applications submitted since UTC midnight, across all domains.
pub async fn leads_today(db: &MongoDB) -> Result<u64, AppError> {
    db.collection::<mongodb::bson::Document>("applications")
        .count_documents(doc! {
            "submitted_at": { "$gte": utc_midnight() },
            "is_deleted": { "$ne": true },
        })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
}

/// Contact messages received since UTC midnight.
pub async fn messages_today(db: &MongoDB) -> Result<u64, AppError> {
    db.collection::<mongodb::bson::Document>("messages")
        .count_documents(doc! { "received_at": { "$gte": utc_midnight() } })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
}

/// Today's applications bucketed by UTC hour - drives both dashboard charts.
pub async fn todays_leads_hourly(db: &MongoDB) -> Result<[u64; 24], AppError> {
    let day_start = utc_midnight();
    let collection = db.collection::<Application>("applications");

    let mut cursor = collection
        .find(doc! {
            "submitted_at": { "$gte": day_start },
            "is_deleted": { "$ne": true },
        })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut timestamps = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(app) => timestamps.push(app.submitted_at),
            Err(e) => log::error!("❌ Skipping unreadable application record: {}", e),
        }
    }

    Ok(hourly_buckets(&timestamps, day_start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_always_have_24_slots() {
        let buckets = hourly_buckets(&[], 0);
        assert_eq!(buckets.len(), 24);
        assert!(buckets.iter().all(|&c| c == 0));
    }

    #[test]
    fn timestamps_land_in_their_hour() {
        let day_start = 1_700_000_000 - (1_700_000_000 % 86_400);
        let timestamps = vec![
            day_start,              // hour 0
            day_start + 3_599,      // still hour 0
            day_start + 3_600,      // hour 1
            day_start + 23 * 3_600, // hour 23
        ];
        let buckets = hourly_buckets(&timestamps, day_start);
        assert_eq!(buckets[0], 2);
        assert_eq!(buckets[1], 1);
        assert_eq!(buckets[23], 1);
        assert_eq!(buckets.iter().sum::<u64>(), 4);
    }

    #[test]
    fn out_of_day_timestamps_are_ignored() {
        let day_start = 86_400;
        let buckets = hourly_buckets(&[day_start - 1, day_start + 86_400], day_start);
        assert_eq!(buckets.iter().sum::<u64>(), 0);
    }

    #[test]
    fn utc_midnight_is_aligned() {
        let midnight = utc_midnight();
        assert_eq!(midnight % 86_400, 0);
        assert!(midnight <= Utc::now().timestamp());
    }
}
