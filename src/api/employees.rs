use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::{CreateEmployeeRequest, HeartbeatRequest, UpdateEmployeeRequest};
use crate::services::auth_service::Claims;
use crate::services::employee_service;

/// GET /api/admin/employees
#[utoipa::path(
    get,
    path = "/api/admin/employees",
    tag = "Employees",
    responses((status = 200, description = "All employees, sorted by name")),
    security(("bearer_auth" = []))
)]
#[get("")]
pub async fn list_employees(db: web::Data<MongoDB>) -> impl Responder {
    match employee_service::list(&db).await {
        Ok(employees) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "employees": employees,
            "total": employees.len(),
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/admin/employees/locations - compact feed for the polling map view
#[get("/locations")]
pub async fn employee_locations(db: web::Data<MongoDB>) -> impl Responder {
    match employee_service::locations(&db).await {
        Ok(locations) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "locations": locations,
        })),
        Err(e) => e.to_response(),
    }
}

/// POST /api/admin/employees
#[utoipa::path(
    post,
    path = "/api/admin/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created"),
        (status = 409, description = "Employee ID already exists")
    ),
    security(("bearer_auth" = []))
)]
#[post("")]
pub async fn create_employee(
    admin: web::ReqData<Claims>,
    body: web::Json<CreateEmployeeRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    log::info!("👷 {} creates employee {}", admin.email, body.employee_id);

    match employee_service::create(&db, &body).await {
        Ok(employee) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "employee": employee,
        })),
        Err(e) => e.to_response(),
    }
}

/// GET /api/admin/employees/{id}
#[get("/{id}")]
pub async fn get_employee(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    match employee_service::get(&db, &path.into_inner()).await {
        Ok(employee) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "employee": employee,
        })),
        Err(e) => e.to_response(),
    }
}

/// PUT /api/admin/employees/{id}
#[put("/{id}")]
pub async fn update_employee(
    path: web::Path<String>,
    body: web::Json<UpdateEmployeeRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match employee_service::update(&db, &path.into_inner(), &body).await {
        Ok(employee) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "employee": employee,
        })),
        Err(e) => e.to_response(),
    }
}

/// DELETE /api/admin/employees/{id}
#[delete("/{id}")]
pub async fn delete_employee(
    admin: web::ReqData<Claims>,
    path: web::Path<String>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let id = path.into_inner();
    log::info!("🗑️  {} deletes employee {}", admin.email, id);

    match employee_service::delete(&db, &id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Employee deleted",
        })),
        Err(e) => e.to_response(),
    }
}

/// POST /api/admin/employees/{id}/heartbeat - presence + location ping
#[post("/{id}/heartbeat")]
pub async fn employee_heartbeat(
    path: web::Path<String>,
    body: web::Json<HeartbeatRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match employee_service::heartbeat(&db, &path.into_inner(), &body).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
        })),
        Err(e) => e.to_response(),
    }
}
