//! Request handlers, one module per resource.

pub mod analytics;
pub mod notifications;
pub mod orders;
pub mod passengers;
pub mod reviews;
pub mod upload;
