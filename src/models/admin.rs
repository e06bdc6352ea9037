use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// Admin account (collection `admins`). Local email/password only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Stable identifier used in JWT `sub` (ObjectId hex)
    pub admin_id: String,

    pub email: String,
    /// bcrypt hash, never serialized out through the API layer
    pub password: String,
    pub name: Option<String>,

    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,

    pub created_at: Option<BsonDateTime>,
    pub updated_at: Option<BsonDateTime>,
    pub last_login: Option<BsonDateTime>,
}

fn default_roles() -> Vec<String> {
    vec!["admin".to_string()]
}

fn default_is_active() -> bool {
    true
}
