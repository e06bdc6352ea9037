use crate::{
    database::MongoDB,
    models::{Application, ApplicationStatus, ServiceDomain},
    utils::csv,
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::Serialize;

const COLLECTION: &str = "applications";

/// Query parameters of the admin list endpoints.
#[derive(Debug, Default, Clone)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationPage {
    pub applications: Vec<Application>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Case-insensitive substring match over the fields the dashboard searches:
/// name, phone and email.
pub fn matches_search(app: &Application, query: &str) -> bool {
    let q = query.to_lowercase();
    if q.is_empty() {
        return true;
    }
    app.full_name.to_lowercase().contains(&q)
        || app.phone.to_lowercase().contains(&q)
        || app
            .email
            .as_deref()
            .map(|e| e.to_lowercase().contains(&q))
            .unwrap_or(false)
}

/// 1-based page slicing. A page past the end yields an empty range, never a panic.
pub fn page_bounds(total: usize, page: u32, page_size: u32) -> (usize, usize, u32) {
    let page_size = page_size.clamp(1, 100);
    let page = page.max(1);
    let total_pages = ((total as u32) + page_size - 1) / page_size;
    let start = ((page - 1) as usize) * (page_size as usize);
    let end = (start + page_size as usize).min(total);
    let start = start.min(total);
    (start, end, total_pages)
}

/// Admins may re-triage between PENDING/APPROVED/REJECTED, but a withdrawn
/// application belongs to the applicant and stays withdrawn.
pub fn can_transition(from: ApplicationStatus, to: ApplicationStatus) -> bool {
    if from == ApplicationStatus::Withdrawn {
        return false;
    }
    // Withdrawal is applicant-initiated, not an admin action
    to != ApplicationStatus::Withdrawn
}

/// Fetches every live application of a domain, newest first, filtered by the
/// optional status and search query. The search semantics mirror the dashboard's
/// in-memory filter exactly.
async fn fetch_filtered(
    db: &MongoDB,
    domain: ServiceDomain,
    params: &ListParams,
) -> Result<Vec<Application>, AppError> {
    let collection = db.collection::<Application>(COLLECTION);

    let mut filter = doc! { "domain": domain.as_str(), "is_deleted": { "$ne": true } };
    if let Some(status) = params.status {
        filter.insert("status", status.as_str());
    }

    let mut cursor = collection
        .find(filter)
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

    if let Some(query) = &params.search {
        applications.retain(|app| matches_search(app, query));
    }

    Ok(applications)
}

pub async fn list(
    db: &MongoDB,
    domain: ServiceDomain,
    params: &ListParams,
) -> Result<ApplicationPage, AppError> {
    let applications = fetch_filtered(db, domain, params).await?;

    let total = applications.len();
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(10).clamp(1, 100);
    let (start, end, total_pages) = page_bounds(total, page, page_size);

    Ok(ApplicationPage {
        applications: applications[start..end].to_vec(),
        total,
        page,
        page_size,
        total_pages,
    })
}

pub async fn get(
    db: &MongoDB,
    domain: ServiceDomain,
    id: &str,
) -> Result<Application, AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<Application>(COLLECTION);

    collection
        .find_one(doc! {
            "_id": object_id,
            "domain": domain.as_str(),
            "is_deleted": { "$ne": true },
        })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
}

/// Status mutation for the review modal's Approve/Reject buttons. Stamps who
/// changed it and when, and returns the updated record.
pub async fn update_status(
    db: &MongoDB,
    domain: ServiceDomain,
    id: &str,
    new_status: ApplicationStatus,
    actor_email: &str,
) -> Result<Application, AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<Application>(COLLECTION);

    let current = collection
        .find_one(doc! {
            "_id": object_id,
            "domain": domain.as_str(),
            "is_deleted": { "$ne": true },
        })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if !can_transition(current.status, new_status) {
        return Err(AppError::Conflict(format!(
            "Cannot change status from {} to {}",
            current.status, new_status
        )));
    }

    collection
        .update_one(
            doc! { "_id": object_id },
            doc! { "$set": {
                "status": new_status.as_str(),
                "status_updated_at": chrono::Utc::now().timestamp(),
                "status_updated_by": actor_email,
            }},
        )
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
}

/// Soft delete: the record stays in the collection but leaves every read path.
pub async fn soft_delete(
    db: &MongoDB,
    domain: ServiceDomain,
    id: &str,
) -> Result<(), AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<Application>(COLLECTION);

    let result = collection
        .update_one(
            doc! {
                "_id": object_id,
                "domain": domain.as_str(),
                "is_deleted": { "$ne": true },
            },
            doc! { "$set": { "is_deleted": true } },
        )
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound("Application not found".to_string()));
    }

    Ok(())
}

const EXPORT_HEADER: [&str; 7] = [
    "id", "name", "phone", "email", "status", "submitted_at", "domain",
];

/// CSV export of the currently filtered set: one header line plus exactly one
/// line per filtered application.
pub async fn export_csv(
    db: &MongoDB,
    domain: ServiceDomain,
    params: &ListParams,
) -> Result<String, AppError> {
    let applications = fetch_filtered(db, domain, params).await?;
    Ok(csv::write_document(&EXPORT_HEADER, &export_rows(&applications)))
}

fn export_rows(applications: &[Application]) -> Vec<Vec<String>> {
    applications
        .iter()
        .map(|app| {
            vec![
                app.id.map(|id| id.to_hex()).unwrap_or_default(),
                app.full_name.clone(),
                app.phone.clone(),
                app.email.clone().unwrap_or_default(),
                app.status.to_string(),
                app.submitted_at.to_string(),
                app.domain.to_string(),
            ]
        })
        .collect()
}

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidRequest("Invalid application ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str, phone: &str, email: Option<&str>, status: ApplicationStatus) -> Application {
        Application {
            id: None,
            domain: ServiceDomain::Ambulance,
            user_id: None,
            full_name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(|e| e.to_string()),
            status,
            details: serde_json::Value::Null,
            documents: vec![],
            submitted_at: 1_700_000_000,
            status_updated_at: None,
            status_updated_by: None,
            is_deleted: false,
        }
    }

    #[test]
    fn search_matches_are_a_subset_and_all_match() {
        let all = vec![
            app("Asha Rao", "9876500001", Some("asha@example.com"), ApplicationStatus::Pending),
            app("Vikram Singh", "9876500002", None, ApplicationStatus::Pending),
            app("RAOUL D", "9000000000", Some("raoul@example.com"), ApplicationStatus::Approved),
        ];

        let filtered: Vec<_> = all.iter().filter(|a| matches_search(a, "rao")).collect();
        assert_eq!(filtered.len(), 2);
        for f in &filtered {
            assert!(matches_search(f, "RAO"), "filter must be case-insensitive");
        }
        assert!(filtered.len() <= all.len());
    }

    #[test]
    fn search_covers_phone_and_email() {
        let a = app("X", "9876500002", Some("ops@ruwa.in"), ApplicationStatus::Pending);
        assert!(matches_search(&a, "650000"));
        assert!(matches_search(&a, "RUWA.IN"));
        assert!(!matches_search(&a, "nomatch"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let a = app("X", "1", None, ApplicationStatus::Pending);
        assert!(matches_search(&a, ""));
    }

    #[test]
    fn page_bounds_cover_boundaries() {
        // 23 items, pages of 10 -> 3 pages
        assert_eq!(page_bounds(23, 1, 10), (0, 10, 3));
        assert_eq!(page_bounds(23, 3, 10), (20, 23, 3));
        // past the end: empty but valid
        assert_eq!(page_bounds(23, 4, 10), (23, 23, 3));
        // page <= total_pages never yields an empty page
        for page in 1..=3u32 {
            let (start, end, _) = page_bounds(23, page, 10);
            assert!(end > start);
        }
    }

    #[test]
    fn page_bounds_clamp_degenerate_input() {
        // page 0 treated as 1, page_size 0 clamped to 1
        assert_eq!(page_bounds(5, 0, 0), (0, 1, 5));
        // page_size above the cap is clamped to 100
        let (start, end, total_pages) = page_bounds(250, 1, 1000);
        assert_eq!((start, end), (0, 100));
        assert_eq!(total_pages, 3);
        // empty collection
        assert_eq!(page_bounds(0, 1, 10), (0, 0, 0));
    }

    #[test]
    fn withdrawn_is_terminal_for_admins() {
        use ApplicationStatus::*;
        assert!(can_transition(Pending, Approved));
        assert!(can_transition(Pending, Rejected));
        assert!(can_transition(Approved, Rejected));
        assert!(can_transition(Rejected, Pending));
        assert!(!can_transition(Withdrawn, Pending));
        assert!(!can_transition(Withdrawn, Approved));
        assert!(!can_transition(Pending, Withdrawn));
    }

    #[test]
    fn export_rows_one_per_application() {
        let apps = vec![
            app("A, B", "1", Some("a@b.c"), ApplicationStatus::Pending),
            app("C", "2", None, ApplicationStatus::Approved),
        ];
        let rows = export_rows(&apps);
        assert_eq!(rows.len(), apps.len());
        assert_eq!(rows[0].len(), EXPORT_HEADER.len());

        let doc = csv::write_document(&EXPORT_HEADER, &rows);
        assert_eq!(doc.lines().count(), 1 + apps.len());
    }
}
