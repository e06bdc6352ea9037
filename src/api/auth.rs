use crate::services::auth_service::{AuthResponse, LoginRequest, RegisterRequest};
use crate::{database::MongoDB, services::auth_service};
use actix_web::{web, HttpRequest, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    db: web::Data<MongoDB>,
    request: web::Json<auth_service::LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /auth/login - email: {}", request.email);

    match auth_service::login(&db, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = AuthResponse),
        (status = 400, description = "Invalid request or admin already exists")
    )
)]
pub async fn register(
    db: web::Data<MongoDB>,
    request: web::Json<auth_service::RegisterRequest>,
) -> HttpResponse {
    log::info!("📝 POST /auth/register - email: {}", request.email);

    match auth_service::register(&db, &request).await {
        Ok(response) => {
            log::info!("✅ Registration successful: {}", request.email);
            HttpResponse::Created().json(response)
        }
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", request.email, e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = "Auth",
    responses(
        (status = 200, description = "Token is valid"),
        (status = 401, description = "Invalid or expired token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn verify_token(req: HttpRequest) -> HttpResponse {
    log::info!("✓ GET /auth/verify");

    let token = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    match token {
        Some(token) => match auth_service::verify_token(token) {
            Ok(claims) => {
                log::info!("✅ Token valid for admin: {}", claims.sub);
                HttpResponse::Ok().json(serde_json::json!({
                    "success": true,
                    "valid": true,
                    "admin_id": claims.sub,
                    "email": claims.email,
                    "exp": claims.exp
                }))
            }
            Err(e) => {
                log::warn!("❌ Invalid token: {}", e);
                HttpResponse::Unauthorized().json(serde_json::json!({
                    "success": false,
                    "valid": false,
                    "error": e
                }))
            }
        },
        None => HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "No valid Authorization header"
        })),
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Admin information retrieved"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_me(db: web::Data<MongoDB>, req: HttpRequest) -> HttpResponse {
    log::info!("👤 GET /auth/me");

    let token = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    let claims = match token.map(auth_service::verify_token) {
        Some(Ok(claims)) => claims,
        Some(Err(e)) => {
            log::warn!("❌ Invalid token: {}", e);
            return HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "error": e
            }));
        }
        None => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "No valid Authorization header"
            }));
        }
    };

    match auth_service::get_current_admin(&db, &claims.sub).await {
        Ok(admin) => {
            log::info!("✅ Admin info retrieved: {}", claims.sub);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "admin": admin
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to get admin: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
