use actix_web::{get, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::services::user_service;

#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// GET /api/admin/users - read-only platform user list
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Users",
    params(UserListQuery),
    responses((status = 200, description = "Paginated platform users, sorted by name")),
    security(("bearer_auth" = []))
)]
#[get("")]
pub async fn list_users(query: web::Query<UserListQuery>, db: web::Data<MongoDB>) -> impl Responder {
    match user_service::list(&db, query.search.as_deref(), query.page, query.page_size).await {
        Ok(page) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "users": page.users,
            "total": page.total,
            "page": page.page,
            "page_size": page.page_size,
            "total_pages": page.total_pages,
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/admin/users/{id}/services - applications this user submitted
#[get("/{id}/services")]
pub async fn user_services(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    match user_service::services_applied(&db, &path.into_inner()).await {
        Ok(applications) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "applications": applications,
            "total": applications.len(),
        })),
        Err(e) => e.to_response(),
    }
}
