use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Public-service domain an application was submitted under.
/// Serialized in kebab-case because the dashboard addresses domains by URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceDomain {
    Ambulance,
    JeevanSuraksha,
    Kendra,
    CardApply,
}

impl ServiceDomain {
    pub const ALL: [ServiceDomain; 4] = [
        ServiceDomain::Ambulance,
        ServiceDomain::JeevanSuraksha,
        ServiceDomain::Kendra,
        ServiceDomain::CardApply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceDomain::Ambulance => "ambulance",
            ServiceDomain::JeevanSuraksha => "jeevan-suraksha",
            ServiceDomain::Kendra => "kendra",
            ServiceDomain::CardApply => "card-apply",
        }
    }
}

impl FromStr for ServiceDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ambulance" => Ok(ServiceDomain::Ambulance),
            "jeevan-suraksha" => Ok(ServiceDomain::JeevanSuraksha),
            "kendra" => Ok(ServiceDomain::Kendra),
            "card-apply" => Ok(ServiceDomain::CardApply),
            other => Err(format!("Unknown service domain: {}", other)),
        }
    }
}

impl fmt::Display for ServiceDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Withdrawn => "WITHDRAWN",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ApplicationStatus::Pending),
            "APPROVED" => Ok(ApplicationStatus::Approved),
            "REJECTED" => Ok(ApplicationStatus::Rejected),
            "WITHDRAWN" => Ok(ApplicationStatus::Withdrawn),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded document reference. The file itself lives in external storage;
/// only the URL travels through this service.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DocumentRef {
    pub label: String,
    pub url: String,
}

/// Service application / lead (stored in MongoDB, collection `applications`).
/// Submitted by the public-facing forms; this service only reads and triages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Which public service this application belongs to
    pub domain: ServiceDomain,

    /// Platform user who submitted it, when known
    pub user_id: Option<String>,

    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,

    pub status: ApplicationStatus,

    /// Domain-specific form payload (insurance nominee, kendra premises, ...)
    #[serde(default)]
    pub details: serde_json::Value,

    #[serde(default)]
    pub documents: Vec<DocumentRef>,

    /// Unix timestamp of submission
    pub submitted_at: i64,

    pub status_updated_at: Option<i64>,
    /// Email of the admin who last changed the status
    pub status_updated_by: Option<String>,

    #[serde(default)]
    pub is_deleted: bool,
}

/// Body of `PATCH .../admin/status/{id}`
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_round_trips_through_path_segment() {
        for domain in ServiceDomain::ALL {
            assert_eq!(domain.as_str().parse::<ServiceDomain>(), Ok(domain));
        }
        assert!("ambulances".parse::<ServiceDomain>().is_err());
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&ApplicationStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let back: ApplicationStatus = serde_json::from_str("\"WITHDRAWN\"").unwrap();
        assert_eq!(back, ApplicationStatus::Withdrawn);
    }
}
