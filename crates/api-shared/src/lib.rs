//! # API Shared
//!
//! Shared wire types for the SpringHealth Labs HTTP API.
//!
//! Contains:
//! - Booking request and response bodies (`booking` module)
//! - Blog post response shapes (`posts` module)
//! - Static site metadata (`site` module)
//! - The `HealthService` used by monitoring checks
//!
//! Everything here is serialisable and carries OpenAPI schema definitions;
//! business rules belong in `springlab-core` and `springlab-content`.

pub mod booking;
pub mod health;
pub mod posts;
pub mod site;

pub use booking::{AppointmentPayload, BookingAccepted, ACCEPTED_MESSAGE};
pub use health::{HealthRes, HealthService};
pub use posts::{PostDetail, PostSummary};
pub use site::SiteInfo;
