use crate::database::MongoDB;
use crate::models::AdminUser;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // admin_id
    pub email: String,
    pub name: Option<String>,
    pub roles: Vec<String>,
    pub iat: usize,
    pub exp: usize,
    pub jti: String,
    pub aud: String,
    pub iss: String,
}

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub admin: AdminInfo,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AdminInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl From<AdminUser> for AdminInfo {
    fn from(admin: AdminUser) -> Self {
        AdminInfo {
            id: admin.admin_id,
            email: admin.email,
            name: admin.name,
            roles: admin.roles,
        }
    }
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

fn get_jwt_issuer() -> String {
    std::env::var("JWT_ISSUER").unwrap_or_else(|_| "ruwa-admin-service".to_string())
}

fn get_jwt_audience() -> String {
    std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "ruwa-admin-panel".to_string())
}

// Generate JWT token (24h, no refresh flow - the dashboard re-logs on expiry)
pub fn generate_jwt(admin: &AdminUser) -> Result<String, String> {
    let iat = Utc::now().timestamp() as usize;
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let jti = Uuid::new_v4().to_string();

    let claims = Claims {
        sub: admin.admin_id.clone(),
        email: admin.email.clone(),
        name: admin.name.clone(),
        roles: admin.roles.clone(),
        iat,
        exp,
        jti,
        aud: get_jwt_audience(),
        iss: get_jwt_issuer(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_ref()),
    )
    .map_err(|e| format!("Failed to generate token: {}", e))
}

// Verify JWT token
pub fn verify_token(token: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[get_jwt_audience()]);

    let mut issuers = HashSet::new();
    issuers.insert(get_jwt_issuer());
    validation.iss = Some(issuers);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Invalid token: {}", e))
}

// Admin login
pub async fn login(db: &MongoDB, request: &LoginRequest) -> Result<AuthResponse, String> {
    let collection = db.collection::<AdminUser>("admins");

    let admin = collection
        .find_one(doc! { "email": &request.email })
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .ok_or_else(|| "Invalid credentials".to_string())?;

    let valid = verify(&request.password, &admin.password)
        .map_err(|e| format!("Password verification error: {}", e))?;

    if !valid {
        return Err("Invalid credentials".to_string());
    }

    if !admin.is_active {
        return Err("Account is inactive".to_string());
    }

    let token = generate_jwt(&admin)?;

    // Stamp last login, best effort
    let _ = collection
        .update_one(
            doc! { "admin_id": &admin.admin_id },
            doc! { "$set": { "last_login": BsonDateTime::now() } },
        )
        .await;

    Ok(AuthResponse {
        success: true,
        token,
        admin: AdminInfo::from(admin),
    })
}

// Admin registration (local email/password only)
pub async fn register(db: &MongoDB, request: &RegisterRequest) -> Result<AuthResponse, String> {
    let collection = db.collection::<AdminUser>("admins");

    if request.password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }

    if collection
        .find_one(doc! { "email": &request.email })
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .is_some()
    {
        return Err("Admin already exists".to_string());
    }

    let hashed_password =
        hash(&request.password, DEFAULT_COST).map_err(|e| format!("Failed to hash password: {}", e))?;

    let admin = AdminUser {
        id: None,
        admin_id: ObjectId::new().to_hex(),
        email: request.email.clone(),
        password: hashed_password,
        name: request.name.clone(),
        roles: vec!["admin".to_string()],
        is_active: true,
        created_at: Some(BsonDateTime::now()),
        updated_at: Some(BsonDateTime::now()),
        last_login: None,
    };

    collection
        .insert_one(&admin)
        .await
        .map_err(|e| format!("Failed to create admin: {}", e))?;

    let token = generate_jwt(&admin)?;

    Ok(AuthResponse {
        success: true,
        token,
        admin: AdminInfo::from(admin),
    })
}

// Current admin lookup for /auth/me
pub async fn get_current_admin(db: &MongoDB, admin_id: &str) -> Result<AdminInfo, String> {
    let collection = db.collection::<AdminUser>("admins");

    let admin = collection
        .find_one(doc! { "admin_id": admin_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .ok_or_else(|| "Admin not found".to_string())?;

    Ok(AdminInfo::from(admin))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_admin() -> AdminUser {
        AdminUser {
            id: None,
            admin_id: "64f000000000000000000001".to_string(),
            email: "admin@ruwa.in".to_string(),
            password: "not-a-real-hash".to_string(),
            name: Some("Ops Admin".to_string()),
            roles: vec!["admin".to_string()],
            is_active: true,
            created_at: None,
            updated_at: None,
            last_login: None,
        }
    }

    #[test]
    fn jwt_round_trip() {
        let token = generate_jwt(&test_admin()).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "64f000000000000000000001");
        assert_eq!(claims.email, "admin@ruwa.in");
        assert_eq!(claims.roles, vec!["admin".to_string()]);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let mut token = generate_jwt(&test_admin()).unwrap();
        token.push('x');
        assert!(verify_token(&token).is_err());
    }
}
