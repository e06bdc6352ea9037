use crate::{
    database::MongoDB,
    models::{Application, PlatformUser},
    services::application_service::page_bounds,
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserPage {
    pub users: Vec<PlatformUser>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Slices the filtered set into the same paginated envelope the application
/// lists use.
pub fn paginate_users(users: Vec<PlatformUser>, page: Option<u32>, page_size: Option<u32>) -> UserPage {
    let total = users.len();
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(10).clamp(1, 100);
    let (start, end, total_pages) = page_bounds(total, page, page_size);

    UserPage {
        users: users[start..end].to_vec(),
        total,
        page,
        page_size,
        total_pages,
    }
}

/// Read-only platform-user listing with the same search and pagination
/// semantics as the application lists (name/email/phone substring,
/// case-insensitive; 1-based pages, page_size clamped 1..=100).
pub async fn list(
    db: &MongoDB,
    search: Option<&str>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<UserPage, AppError> {
    let collection = db.collection::<PlatformUser>("users");

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => users.push(user),
            Err(e) => log::error!("❌ Skipping unreadable user record: {}", e),
        }
    }

    if let Some(query) = search {
        let q = query.to_lowercase();
        if !q.is_empty() {
            users.retain(|u| {
                u.name.to_lowercase().contains(&q)
                    || u.email.to_lowercase().contains(&q)
                    || u.phone
                        .as_deref()
                        .map(|p| p.to_lowercase().contains(&q))
                        .unwrap_or(false)
            });
        }
    }

    users.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    Ok(paginate_users(users, page, page_size))
}

/// "Services applied" drill-down: every live application this user submitted,
/// across all domains, newest first.
pub async fn services_applied(db: &MongoDB, user_id: &str) -> Result<Vec<Application>, AppError> {
    // Validate it at least looks like an id before querying
    ObjectId::parse_str(user_id)
        .map_err(|_| AppError::InvalidRequest("Invalid user ID".to_string()))?;

    let collection = db.collection::<Application>("applications");

    let mut cursor = collection
        .find(doc! { "user_id": user_id, "is_deleted": { "$ne": true } })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut applications = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(app) => applications.push(app),
            Err(e) => log::error!("❌ Skipping unreadable application record: {}", e),
        }
    }

    applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

    Ok(applications)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(n: usize) -> Vec<PlatformUser> {
        (0..n)
            .map(|i| PlatformUser {
                id: None,
                name: format!("User {:03}", i),
                email: format!("user{}@example.com", i),
                phone: None,
                role: "user".to_string(),
                is_verified: false,
                is_online: false,
                created_at: None,
            })
            .collect()
    }

    #[test]
    fn user_pages_cover_boundaries() {
        // 23 users, pages of 10 -> 3 pages
        let page = paginate_users(users(23), Some(1), Some(10));
        assert_eq!((page.users.len(), page.total, page.total_pages), (10, 23, 3));

        let last = paginate_users(users(23), Some(3), Some(10));
        assert_eq!(last.users.len(), 3);
        assert_eq!(last.users[0].name, "User 020");

        // past the end: empty page, truthful envelope
        let past = paginate_users(users(23), Some(4), Some(10));
        assert_eq!(past.users.len(), 0);
        assert_eq!((past.total, past.total_pages), (23, 3));
    }

    #[test]
    fn user_page_defaults_and_clamps() {
        // defaults: page 1, page_size 10
        let page = paginate_users(users(12), None, None);
        assert_eq!((page.page, page.page_size, page.users.len()), (1, 10, 10));

        // degenerate input is clamped, not panicked on
        let clamped = paginate_users(users(5), Some(0), Some(0));
        assert_eq!((clamped.page, clamped.page_size, clamped.users.len()), (1, 1, 1));

        let capped = paginate_users(users(150), Some(1), Some(1000));
        assert_eq!((capped.page_size, capped.users.len()), (100, 100));
    }
}
