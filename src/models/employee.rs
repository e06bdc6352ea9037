use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One row of the educational-qualifications table on the employee form.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Qualification {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Employee record (collection `employees`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Human-readable employee code (e.g. "RUWA-0042"), unique
    pub employee_id: String,

    pub name: String,
    pub department: String,
    pub position: String,

    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,

    #[serde(default)]
    pub qualifications: Vec<Qualification>,

    #[serde(default)]
    pub is_verified: bool,

    /// Presence, driven by the heartbeat endpoint and the staleness sweeper
    #[serde(default)]
    pub is_online: bool,
    pub last_seen_at: Option<i64>,
    pub location: Option<GeoPoint>,

    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateEmployeeRequest {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
}

/// Partial update; the qualifications array, when present, replaces the stored
/// one wholesale (the form edits rows locally and submits the full array).
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_verified: Option<bool>,
    pub qualifications: Option<Vec<Qualification>>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct HeartbeatRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Compact row for the polling location/map view.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EmployeeLocation {
    pub id: String,
    pub name: String,
    pub is_online: bool,
    pub location: Option<GeoPoint>,
    pub last_seen_at: Option<i64>,
}

impl From<Employee> for EmployeeLocation {
    fn from(e: Employee) -> Self {
        EmployeeLocation {
            id: e.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: e.name,
            is_online: e.is_online,
            location: e.location,
            last_seen_at: e.last_seen_at,
        }
    }
}
