pub mod application_service;
pub mod auth_service;
pub mod content_service;
pub mod dashboard_service;
pub mod employee_service;
pub mod message_service;
pub mod user_service;
