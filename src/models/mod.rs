pub mod admin;
pub mod application;
pub mod content;
pub mod employee;
pub mod message;
pub mod user;

pub use admin::*;
pub use application::*;
pub use content::*;
pub use employee::*;
pub use message::*;
pub use user::*;
