use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// Content blocks for the public site, edited from the admin panel.
// Hero and About are singletons (one document each); slides, service cards
// and testimonials are plain lists.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct HeroUpsertRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub caption: Option<String>,
    pub image_url: String,
    /// Display order on the public carousel
    #[serde(default)]
    pub position: i32,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SlideRequest {
    pub title: String,
    pub caption: Option<String>,
    pub image_url: String,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCard {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub icon_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ServiceCardRequest {
    pub title: String,
    pub description: String,
    pub icon_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// One row of the mission list on the About page.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MissionItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub heading: String,
    pub body: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub mission: Vec<MissionItem>,
    pub updated_at: i64,
}

/// The mission array arrives exactly as the form submitted it; row add/remove
/// happens on the client, the server stores the result.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AboutUpsertRequest {
    pub heading: String,
    pub body: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub mission: Vec<MissionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub author: String,
    pub role: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TestimonialRequest {
    pub author: String,
    pub role: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
}
