pub mod applications;
pub mod auth;
pub mod content;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod messages;
pub mod metrics;
pub mod swagger;
pub mod users;
