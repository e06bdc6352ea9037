use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Contact-form message (collection `messages`). Written by the public site,
/// read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub received_at: i64,
}
