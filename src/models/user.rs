use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// End user of the public platform (collection `users`).
/// This service only reads them; accounts are created by the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,
    pub email: String,
    pub phone: Option<String>,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_online: bool,

    pub created_at: Option<i64>,
}

fn default_role() -> String {
    "user".to_string()
}
