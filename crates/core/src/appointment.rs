//! Appointment validation.
//!
//! The website form enforces these rules client-side; they are re-checked
//! here because nothing stops a caller from POSTing directly to the API.
//! All rules are evaluated before reporting so a single response can list
//! every failing field, and field names keep the form's camelCase spelling
//! so the frontend can attach messages to inputs directly.

use api_shared::AppointmentPayload;
use springlab_types::EmailAddress;

/// Minimum length for the name fields, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum length for the phone field, in characters.
pub const MIN_PHONE_CHARS: usize = 10;

/// Per-field validation failures, in the order the form presents fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates `(field, message)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Messages recorded for one field.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

/// Serialises as a map from field name to its list of messages, preserving
/// field order, e.g. `{"firstName": ["First name must be at least 2 characters"]}`.
impl serde::Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut grouped: Vec<(&str, Vec<&str>)> = Vec::new();
        for (field, message) in &self.errors {
            let field: &str = field;
            match grouped.iter_mut().find(|entry| entry.0 == field) {
                Some(entry) => entry.1.push(message.as_str()),
                None => grouped.push((field, vec![message.as_str()])),
            }
        }

        let mut map = serializer.serialize_map(Some(grouped.len()))?;
        for (field, messages) in grouped {
            map.serialize_entry(field, &messages)?;
        }
        map.end()
    }
}

/// A booking submission that has passed validation.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: String,
    /// Requested date as submitted, normally `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub test_type: String,
    /// Free-text notes; `None` when the form sent nothing or an empty string.
    pub message: Option<String>,
}

/// Checks a raw submission against the booking form rules.
///
/// # Errors
/// Returns [`ValidationErrors`] listing every failing field with the same
/// wording the form shows:
/// - names shorter than [`MIN_NAME_CHARS`] characters,
/// - an address [`EmailAddress`] will not accept,
/// - a phone number shorter than [`MIN_PHONE_CHARS`] characters,
/// - an empty date, time or test type.
pub fn validate(payload: &AppointmentPayload) -> Result<Appointment, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if payload.first_name.chars().count() < MIN_NAME_CHARS {
        errors.push("firstName", "First name must be at least 2 characters");
    }
    if payload.last_name.chars().count() < MIN_NAME_CHARS {
        errors.push("lastName", "Last name must be at least 2 characters");
    }
    let email = match EmailAddress::parse(&payload.email) {
        Ok(email) => Some(email),
        Err(_) => {
            errors.push("email", "Please enter a valid email address");
            None
        }
    };
    if payload.phone.chars().count() < MIN_PHONE_CHARS {
        errors.push("phone", "Please enter a valid phone number");
    }
    if payload.date.is_empty() {
        errors.push("date", "Please select a date");
    }
    if payload.time.is_empty() {
        errors.push("time", "Please select a time");
    }
    if payload.test_type.is_empty() {
        errors.push("testType", "Please select a test type");
    }

    match email {
        Some(email) if errors.is_empty() => Ok(Appointment {
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            email,
            phone: payload.phone.clone(),
            date: payload.date.clone(),
            time: payload.time.clone(),
            test_type: payload.test_type.clone(),
            message: payload
                .message
                .clone()
                .filter(|message| !message.is_empty()),
        }),
        _ => Err(errors),
    }
}
