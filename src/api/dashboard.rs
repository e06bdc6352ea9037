use actix_web::{get, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::services::dashboard_service;

/// GET /api/admin/summary - headline counts for the dashboard cards
#[utoipa::path(
    get,
    path = "/api/admin/summary",
    tag = "Dashboard",
    responses((status = 200, description = "Per-domain and total counts", body = dashboard_service::DashboardSummary)),
    security(("bearer_auth" = []))
)]
#[get("/summary")]
pub async fn get_summary(db: web::Data<MongoDB>) -> impl Responder {
    match dashboard_service::summary(&db).await {
        Ok(summary) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "summary": summary,
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/admin/leads/today
#[get("/leads/today")]
pub async fn leads_today(db: web::Data<MongoDB>) -> impl Responder {
    match dashboard_service::leads_today(&db).await {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "count": count,
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/admin/leads/todays-leads-hourly - 24 UTC buckets for the charts
#[utoipa::path(
    get,
    path = "/api/admin/leads/todays-leads-hourly",
    tag = "Dashboard",
    responses((status = 200, description = "Exactly 24 hourly counts for today")),
    security(("bearer_auth" = []))
)]
#[get("/leads/todays-leads-hourly")]
pub async fn todays_leads_hourly(db: web::Data<MongoDB>) -> impl Responder {
    match dashboard_service::todays_leads_hourly(&db).await {
        Ok(buckets) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "hourly": buckets.to_vec(),
        })),
        Err(e) => e.to_response(),
    }
}
