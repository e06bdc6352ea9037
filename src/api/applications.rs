use actix_web::{delete, get, patch, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::{ApplicationStatus, ServiceDomain, UpdateStatusRequest};
use crate::services::application_service::{self, ListParams};
use crate::services::auth_service::Claims;

/// Query string of the list/export endpoints. `status` arrives as a plain
/// string and is validated against the known set.
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl TryFrom<ListQuery> for ListParams {
    type Error = HttpResponse;

    fn try_from(q: ListQuery) -> Result<Self, Self::Error> {
        let status = match q.status.as_deref() {
            Some(s) => Some(s.parse::<ApplicationStatus>().map_err(|e| {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "success": false,
                    "error": e
                }))
            })?),
            None => None,
        };

        Ok(ListParams {
            search: q.search,
            status,
            page: q.page,
            page_size: q.page_size,
        })
    }
}

fn parse_domain(segment: &str) -> Result<ServiceDomain, HttpResponse> {
    segment.parse::<ServiceDomain>().map_err(|e| {
        HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": e
        }))
    })
}

/// GET /api/services/{domain}/admin/all - filtered, paginated list
#[utoipa::path(
    get,
    path = "/api/services/{domain}/admin/all",
    tag = "Applications",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated applications for the domain"),
        (status = 400, description = "Unknown service domain")
    ),
    security(("bearer_auth" = []))
)]
#[get("/all")]
pub async fn list_applications(
    path: web::Path<String>,
    query: web::Query<ListQuery>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let domain = match parse_domain(&path.into_inner()) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let params = match ListParams::try_from(query.into_inner()) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match application_service::list(&db, domain, &params).await {
        Ok(page) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "applications": page.applications,
            "total": page.total,
            "page": page.page,
            "page_size": page.page_size,
            "total_pages": page.total_pages,
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/services/{domain}/admin/export.csv - CSV of the filtered set
#[get("/export.csv")]
pub async fn export_applications(
    path: web::Path<String>,
    query: web::Query<ListQuery>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let domain = match parse_domain(&path.into_inner()) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let params = match ListParams::try_from(query.into_inner()) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match application_service::export_csv(&db, domain, &params).await {
        Ok(body) => {
            let filename = format!("{}-applications.csv", domain);
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(body)
        }
        Err(e) => e.to_response(),
    }
}

/// PATCH /api/services/{domain}/admin/status/{id} - approve/reject
#[utoipa::path(
    patch,
    path = "/api/services/{domain}/admin/status/{id}",
    tag = "Applications",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated, returns the record"),
        (status = 404, description = "Application not found"),
        (status = 409, description = "Transition not allowed")
    ),
    security(("bearer_auth" = []))
)]
#[patch("/status/{id}")]
pub async fn update_application_status(
    admin: web::ReqData<Claims>,
    path: web::Path<(String, String)>,
    body: web::Json<UpdateStatusRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let (domain_segment, id) = path.into_inner();
    let domain = match parse_domain(&domain_segment) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    log::info!(
        "📋 {} sets {}/{} -> {}",
        admin.email, domain, id, body.status
    );

    match application_service::update_status(&db, domain, &id, body.status, &admin.email).await {
        Ok(application) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "application": application,
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/services/{domain}/admin/{id} - one record for the review modal.
/// Registered last in the scope: catch-all segment.
#[get("/{id}")]
pub async fn get_application(
    path: web::Path<(String, String)>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let (domain_segment, id) = path.into_inner();
    let domain = match parse_domain(&domain_segment) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    match application_service::get(&db, domain, &id).await {
        Ok(application) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "application": application,
        })),
        Err(e) => e.to_response(),
    }
}

/// DELETE /api/services/{domain}/admin/{id} - soft delete
#[delete("/{id}")]
pub async fn delete_application(
    admin: web::ReqData<Claims>,
    path: web::Path<(String, String)>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let (domain_segment, id) = path.into_inner();
    let domain = match parse_domain(&domain_segment) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    log::info!("🗑️  {} deletes {}/{}", admin.email, domain, id);

    match application_service::soft_delete(&db, domain, &id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Application deleted",
        })),
        Err(e) => e.to_response(),
    }
}
