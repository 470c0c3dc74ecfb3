//! Booking orchestration: validate, format, dispatch.

use std::sync::Arc;

use api_shared::AppointmentPayload;
use springlab_mailer::Mailer;

use crate::appointment::validate;
use crate::config::BookingConfig;
use crate::notification;
use crate::{BookingError, BookingResult};

/// Coordinates the booking flow for one submission.
///
/// Validation failures are reported without sending anything. For an
/// acceptable payload the operator alert goes out first, then the requester
/// confirmation; a failure in either is surfaced to the caller, so a booking
/// is never acknowledged when the laboratory was not notified.
#[derive(Clone)]
pub struct BookingService {
    config: BookingConfig,
    mailer: Arc<dyn Mailer>,
}

impl BookingService {
    pub fn new(config: BookingConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    /// The configuration this service was constructed with.
    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Validates a submission and dispatches both notification emails.
    ///
    /// # Errors
    /// - [`BookingError::Validation`] listing every failing field
    /// - [`BookingError::Dispatch`] when the mail API cannot be reached or
    ///   rejects a message
    pub async fn submit(&self, payload: &AppointmentPayload) -> BookingResult<()> {
        let appointment = validate(payload).map_err(BookingError::Validation)?;

        let alert = notification::operator_alert(&self.config, &appointment);
        let confirmation = notification::requester_confirmation(&self.config, &appointment);

        self.mailer.send(&alert).await?;
        self.mailer.send(&confirmation).await?;

        // No requester identifiers in the log line; test type and slot are
        // enough to trace volume.
        tracing::info!(
            test_type = %appointment.test_type,
            date = %appointment.date,
            time = %appointment.time,
            "appointment request accepted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use springlab_mailer::{MailerError, MailerResult, OutboundEmail};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutboundEmail>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> MailerResult<()> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _email: &OutboundEmail) -> MailerResult<()> {
            Err(MailerError::Rejected { status: 502 })
        }
    }

    fn config() -> BookingConfig {
        BookingConfig::from_env_values(Some("lab@springhealthlabs.com".into()), None).unwrap()
    }

    fn valid_payload() -> AppointmentPayload {
        AppointmentPayload {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "5551234567".into(),
            date: "2026-01-05".into(),
            time: "09:30".into(),
            test_type: "Thyroid Test".into(),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_submit_sends_alert_then_confirmation() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = BookingService::new(config(), mailer.clone());

        service.submit(&valid_payload()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to.as_str(), "lab@springhealthlabs.com");
        assert_eq!(sent[0].subject, "New Appointment Request: Jane Doe");
        assert_eq!(sent[1].to.as_str(), "jane@example.com");
        assert_eq!(sent[1].subject, "Your Appointment Request - SpringHealth Lab");
    }

    #[tokio::test]
    async fn test_invalid_payload_sends_nothing() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = BookingService::new(config(), mailer.clone());

        let mut payload = valid_payload();
        payload.email = "nope".into();

        let err = service.submit(&payload).await.unwrap_err();
        match err {
            BookingError::Validation(errors) => {
                assert_eq!(
                    errors.messages_for("email"),
                    vec!["Please enter a valid email address"]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_surfaced() {
        let service = BookingService::new(config(), Arc::new(FailingMailer));
        let err = service.submit(&valid_payload()).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::Dispatch(MailerError::Rejected { status: 502 })
        ));
    }
}
