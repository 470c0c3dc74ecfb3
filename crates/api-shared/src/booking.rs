//! Request and response bodies for the appointment booking endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned alongside a `201 Created` booking response.
pub const ACCEPTED_MESSAGE: &str =
    "Appointment request received. We will contact you soon to confirm your booking.";

/// Raw booking submission as it arrives from the website form.
///
/// Every field the form may omit defaults to an empty string so that a
/// structurally valid JSON body always deserialises; deciding whether the
/// values are acceptable is the validator's job, which lets one response
/// report every problem at once.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Requested appointment date, `YYYY-MM-DD` as produced by the form's
    /// date picker.
    #[serde(default)]
    pub date: String,
    /// Requested time slot, e.g. `09:30`.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub test_type: String,
    /// Optional free-text notes from the requester.
    pub message: Option<String>,
}

/// Body of a successful booking response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingAccepted {
    pub success: bool,
    pub message: String,
}

impl BookingAccepted {
    /// The standard acknowledgement sent when a request has been accepted
    /// and both notification emails have been dispatched.
    pub fn received() -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accepts_camel_case_fields() {
        let payload: AppointmentPayload = serde_json::from_value(serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "phone": "5551234567",
            "date": "2026-01-05",
            "time": "09:30",
            "testType": "Complete Blood Count (CBC)",
            "message": "First visit"
        }))
        .unwrap();
        assert_eq!(payload.first_name, "Jane");
        assert_eq!(payload.test_type, "Complete Blood Count (CBC)");
        assert_eq!(payload.message.as_deref(), Some("First visit"));
    }

    #[test]
    fn test_payload_missing_fields_default_to_empty() {
        let payload: AppointmentPayload =
            serde_json::from_value(serde_json::json!({ "firstName": "Jane" })).unwrap();
        assert_eq!(payload.first_name, "Jane");
        assert_eq!(payload.last_name, "");
        assert_eq!(payload.email, "");
        assert_eq!(payload.message, None);
    }

    #[test]
    fn test_accepted_body_shape() {
        let body = serde_json::to_value(BookingAccepted::received()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "message": ACCEPTED_MESSAGE,
            })
        );
    }
}
