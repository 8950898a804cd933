//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod order_repo;
pub mod passenger_repo;
pub mod review_repo;

pub use analytics_repo::AnalyticsRepo;
pub use order_repo::OrderRepo;
pub use passenger_repo::PassengerRepo;
pub use review_repo::ReviewRepo;
