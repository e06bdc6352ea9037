use crate::{
    database::MongoDB,
    models::{
        CreateEmployeeRequest, Employee, EmployeeLocation, GeoPoint, HeartbeatRequest,
        UpdateEmployeeRequest,
    },
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};

const COLLECTION: &str = "employees";

/// Seconds without a heartbeat after which an employee counts as offline.
/// The dashboard polls locations every 15-30 s; 90 s tolerates two missed polls.
pub const PRESENCE_STALE_SECS: i64 = 90;

pub fn is_stale(last_seen_at: Option<i64>, now: i64) -> bool {
    match last_seen_at {
        Some(ts) => now - ts > PRESENCE_STALE_SECS,
        None => true,
    }
}

pub async fn list(db: &MongoDB) -> Result<Vec<Employee>, AppError> {
    let collection = db.collection::<Employee>(COLLECTION);

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut employees = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(employee) => employees.push(employee),
            Err(e) => log::error!("❌ Skipping unreadable employee record: {}", e),
        }
    }

    employees.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    Ok(employees)
}

pub async fn get(db: &MongoDB, id: &str) -> Result<Employee, AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<Employee>(COLLECTION);

    collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))
}

pub async fn create(db: &MongoDB, request: &CreateEmployeeRequest) -> Result<Employee, AppError> {
    let collection = db.collection::<Employee>(COLLECTION);

    if request.employee_id.trim().is_empty() {
        return Err(AppError::InvalidRequest("employee_id is required".to_string()));
    }

    // Unique index backs this up, but a clean 409 beats a duplicate-key 500
    if collection
        .find_one(doc! { "employee_id": &request.employee_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "Employee ID {} already exists",
            request.employee_id
        )));
    }

    let now = chrono::Utc::now().timestamp();
    let mut employee = Employee {
        id: None,
        employee_id: request.employee_id.clone(),
        name: request.name.clone(),
        department: request.department.clone(),
        position: request.position.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        address: request.address.clone(),
        qualifications: request.qualifications.clone(),
        is_verified: false,
        is_online: false,
        last_seen_at: None,
        location: None,
        created_at: now,
        updated_at: now,
    };

    let result = collection
        .insert_one(&employee)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    employee.id = result.inserted_id.as_object_id();

    Ok(employee)
}

pub async fn update(
    db: &MongoDB,
    id: &str,
    request: &UpdateEmployeeRequest,
) -> Result<Employee, AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<Employee>(COLLECTION);

    let mut update_doc = doc! { "updated_at": chrono::Utc::now().timestamp() };

    if let Some(name) = &request.name {
        update_doc.insert("name", name);
    }
    if let Some(department) = &request.department {
        update_doc.insert("department", department);
    }
    if let Some(position) = &request.position {
        update_doc.insert("position", position);
    }
    if let Some(email) = &request.email {
        update_doc.insert("email", email);
    }
    if let Some(phone) = &request.phone {
        update_doc.insert("phone", phone);
    }
    if let Some(address) = &request.address {
        update_doc.insert("address", address);
    }
    if let Some(is_verified) = request.is_verified {
        update_doc.insert("is_verified", is_verified);
    }
    if let Some(qualifications) = &request.qualifications {
        // The form edits rows locally; the submitted array replaces the stored one
        let bson = mongodb::bson::to_bson(qualifications)
            .map_err(|e| AppError::InvalidRequest(format!("Bad qualifications: {}", e)))?;
        update_doc.insert("qualifications", bson);
    }

    let result = collection
        .update_one(doc! { "_id": object_id }, doc! { "$set": update_doc })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    get(db, id).await
}

pub async fn delete(db: &MongoDB, id: &str) -> Result<(), AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<Employee>(COLLECTION);

    let result = collection
        .delete_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(())
}

/// Heartbeat from the employee's device: marks them online, stamps last_seen_at,
/// updates the location when provided.
pub async fn heartbeat(
    db: &MongoDB,
    id: &str,
    request: &HeartbeatRequest,
) -> Result<(), AppError> {
    let object_id = parse_id(id)?;
    let collection = db.collection::<Employee>(COLLECTION);

    let mut update_doc = doc! {
        "is_online": true,
        "last_seen_at": chrono::Utc::now().timestamp(),
    };

    if let (Some(lat), Some(lng)) = (request.lat, request.lng) {
        let bson = mongodb::bson::to_bson(&GeoPoint { lat, lng })
            .map_err(|e| AppError::InvalidRequest(format!("Bad location: {}", e)))?;
        update_doc.insert("location", bson);
    }

    let result = collection
        .update_one(doc! { "_id": object_id }, doc! { "$set": update_doc })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(())
}

/// Compact feed for the polling map view.
pub async fn locations(db: &MongoDB) -> Result<Vec<EmployeeLocation>, AppError> {
    let employees = list(db).await?;
    Ok(employees.into_iter().map(EmployeeLocation::from).collect())
}

/// Marks every employee whose heartbeat went stale as offline.
/// Returns how many were flipped.
pub async fn sweep_stale_presence(db: &MongoDB) -> Result<u64, AppError> {
    let collection = db.collection::<Employee>(COLLECTION);
    let cutoff = chrono::Utc::now().timestamp() - PRESENCE_STALE_SECS;

    let result = collection
        .update_many(
            doc! {
                "is_online": true,
                "$or": [
                    { "last_seen_at": { "$lt": cutoff } },
                    { "last_seen_at": null },
                ],
            },
            doc! { "$set": { "is_online": false } },
        )
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(result.modified_count)
}

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidRequest("Invalid employee ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staleness_threshold() {
        let now = 10_000;
        assert!(is_stale(None, now));
        assert!(is_stale(Some(now - PRESENCE_STALE_SECS - 1), now));
        assert!(!is_stale(Some(now - PRESENCE_STALE_SECS), now));
        assert!(!is_stale(Some(now), now));
    }
}
