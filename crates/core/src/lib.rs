//! # Springlab Core
//!
//! Core business logic for the SpringHealth Labs booking flow.
//!
//! This crate owns everything between "a JSON payload arrived" and "two
//! notification emails went out":
//! - Appointment validation with per-field error collection
//! - Notification formatting for the operator alert and requester confirmation
//! - `BookingService`, which strings validation, formatting and dispatch together
//! - Startup-resolved configuration (`BookingConfig`)
//!
//! **No API concerns**: HTTP status codes, routing and OpenAPI documentation belong in `api-rest`.

pub mod appointment;
pub mod booking;
pub mod config;
pub mod notification;

pub use appointment::{validate, Appointment, ValidationErrors};
pub use booking::BookingService;
pub use config::{BookingConfig, ConfigError, DEFAULT_SITE_NAME};

use springlab_mailer::MailerError;

/// Failures from submitting a booking request.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The payload failed validation; every failing field is recorded.
    #[error("appointment request failed validation")]
    Validation(ValidationErrors),
    /// A notification email could not be delivered.
    #[error("failed to dispatch notification: {0}")]
    Dispatch(#[from] MailerError),
}

pub type BookingResult<T> = std::result::Result<T, BookingError>;
