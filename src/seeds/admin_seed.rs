use crate::database::MongoDB;
use crate::models::AdminUser;
use bcrypt::{hash, DEFAULT_COST};
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use std::env;

/// Bootstraps the first admin account from ADMIN_EMAIL / ADMIN_PASSWORD.
/// Only runs when the admins collection is empty.
pub async fn seed_default_admin(db: &MongoDB) {
    let collection = db.collection::<AdminUser>("admins");

    let count = collection.count_documents(doc! {}).await.unwrap_or(0);

    if count > 0 {
        log::info!("👤 Admin accounts: {} already in DB, skipping seed", count);
        return;
    }

    let (email, password) = match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => (email, password),
        _ => {
            log::warn!("👤 No admins in DB and ADMIN_EMAIL/ADMIN_PASSWORD not set, register one via /api/auth/register");
            return;
        }
    };

    let hashed = match hash(&password, DEFAULT_COST) {
        Ok(h) => h,
        Err(e) => {
            log::error!("   ❌ Failed to hash seed admin password: {}", e);
            return;
        }
    };

    let admin = AdminUser {
        id: None,
        admin_id: ObjectId::new().to_hex(),
        email: email.clone(),
        password: hashed,
        name: Some("Administrator".to_string()),
        roles: vec!["admin".to_string()],
        is_active: true,
        created_at: Some(BsonDateTime::now()),
        updated_at: Some(BsonDateTime::now()),
        last_login: None,
    };

    match collection.insert_one(&admin).await {
        Ok(_) => log::info!("   ✅ Seeded default admin account: {}", email),
        Err(e) => log::error!("   ❌ Failed to seed default admin: {}", e),
    }
}
