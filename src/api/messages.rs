use actix_web::{get, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::services::{dashboard_service, message_service};

/// GET /api/admin/messages - contact messages, newest first
#[get("")]
pub async fn list_messages(db: web::Data<MongoDB>) -> impl Responder {
    match message_service::list(&db).await {
        Ok(messages) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "messages": messages,
            "total": messages.len(),
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/admin/messages/today - count since UTC midnight
#[get("/today")]
pub async fn messages_today(db: web::Data<MongoDB>) -> impl Responder {
    match dashboard_service::messages_today(&db).await {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "count": count,
        })),
        Err(e) => e.to_response(),
    }
}
