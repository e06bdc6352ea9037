use crate::{database::MongoDB, models::ContactMessage, utils::error::AppError};
use futures::stream::StreamExt;
use mongodb::bson::doc;

/// Contact messages, newest first. Read-only - the public site writes them.
pub async fn list(db: &MongoDB) -> Result<Vec<ContactMessage>, AppError> {
    let mut cursor = db
        .collection::<ContactMessage>("messages")
        .find(doc! {})
        .sort(doc! { "received_at": -1 })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut messages = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(message) => messages.push(message),
            Err(e) => log::error!("❌ Skipping unreadable message: {}", e),
        }
    }

    Ok(messages)
}
