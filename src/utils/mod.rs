// Utility functions
pub mod cache;
pub mod csv;
pub mod error;

pub use cache::*;
pub use error::*;
