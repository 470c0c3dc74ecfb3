//! Notification formatting for accepted booking requests.
//!
//! Two messages go out per accepted request: an alert to the laboratory
//! operator inbox and a confirmation to the requester. Bodies are
//! inline-styled HTML so they render consistently in mail clients.
//! User-entered text is escaped before interpolation; an email body is no
//! place to discover what the message field contained.

use chrono::NaiveDate;
use springlab_mailer::OutboundEmail;

use crate::appointment::Appointment;
use crate::config::BookingConfig;

const WRAPPER_STYLE: &str =
    "font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto;";
const PANEL_STYLE: &str =
    "background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;";
const HEADING_COLOUR: &str = "#1a365d";
const SUBHEADING_COLOUR: &str = "#2d3748";
const FOOTER_STYLE: &str = "color: #718096; font-size: 0.9em; margin-top: 30px;";
const RULED_FOOTER_STYLE: &str = "color: #718096; font-size: 0.9em; margin-top: 30px; \
     border-top: 1px solid #e2e8f0; padding-top: 20px;";

const AUTOMATED_NOTE: &str = "This is an automated message. Please do not reply to this email.";

/// Formats the alert sent to the laboratory operator inbox.
pub fn operator_alert(config: &BookingConfig, appointment: &Appointment) -> OutboundEmail {
    let mut html = String::new();
    html.push_str(&format!("<div style=\"{WRAPPER_STYLE}\">"));
    html.push_str(&format!(
        "<h2 style=\"color: {HEADING_COLOUR};\">New Appointment Request</h2>"
    ));

    html.push_str(&format!("<div style=\"{PANEL_STYLE}\">"));
    html.push_str(&format!(
        "<h3 style=\"color: {SUBHEADING_COLOUR}; margin-top: 0;\">Patient Information</h3>"
    ));
    html.push_str(&format!(
        "<p><strong>Name:</strong> {} {}</p>",
        escape_html(&appointment.first_name),
        escape_html(&appointment.last_name)
    ));
    html.push_str(&format!(
        "<p><strong>Email:</strong> {}</p>",
        escape_html(appointment.email.as_str())
    ));
    html.push_str(&format!(
        "<p><strong>Phone:</strong> {}</p>",
        escape_html(&appointment.phone)
    ));

    html.push_str(&format!(
        "<h3 style=\"color: {SUBHEADING_COLOUR}; margin-top: 20px;\">Appointment Details</h3>"
    ));
    push_detail_rows(&mut html, appointment);

    if let Some(message) = &appointment.message {
        html.push_str(&format!(
            "<h3 style=\"color: {SUBHEADING_COLOUR}; margin-top: 20px;\">Additional Information</h3>"
        ));
        html.push_str(&format!("<p>{}</p>", message_html(message)));
    }
    html.push_str("</div>");

    html.push_str(&format!("<p style=\"{FOOTER_STYLE}\">{AUTOMATED_NOTE}</p>"));
    html.push_str("</div>");

    OutboundEmail {
        to: config.operator_address().clone(),
        subject: format!(
            "New Appointment Request: {} {}",
            appointment.first_name, appointment.last_name
        ),
        html_body: html,
    }
}

/// Formats the confirmation sent back to the requester.
pub fn requester_confirmation(config: &BookingConfig, appointment: &Appointment) -> OutboundEmail {
    let site_name = config.site_name();

    let mut html = String::new();
    html.push_str(&format!("<div style=\"{WRAPPER_STYLE}\">"));
    html.push_str(&format!(
        "<h2 style=\"color: {HEADING_COLOUR};\">Appointment Request Received</h2>"
    ));
    html.push_str(&format!(
        "<p>Dear {},</p>",
        escape_html(&appointment.first_name)
    ));
    html.push_str(&format!(
        "<p>Thank you for booking an appointment with {}. We have received your request \
         with the following details:</p>",
        escape_html(site_name)
    ));

    html.push_str(&format!("<div style=\"{PANEL_STYLE}\">"));
    html.push_str(&format!(
        "<h3 style=\"color: {SUBHEADING_COLOUR}; margin-top: 0;\">Your Appointment</h3>"
    ));
    push_detail_rows(&mut html, appointment);
    html.push_str("</div>");

    html.push_str(
        "<p>Our team will review your request and contact you shortly to confirm your \
         appointment. If you have any questions, please don't hesitate to contact us.</p>",
    );
    html.push_str(&format!(
        "<p>Best regards,<br>The {} Team</p>",
        escape_html(site_name)
    ));
    html.push_str(&format!(
        "<p style=\"{RULED_FOOTER_STYLE}\">{AUTOMATED_NOTE}</p>"
    ));
    html.push_str("</div>");

    OutboundEmail {
        to: appointment.email.clone(),
        subject: format!("Your Appointment Request - {site_name}"),
        html_body: html,
    }
}

fn push_detail_rows(html: &mut String, appointment: &Appointment) {
    html.push_str(&format!(
        "<p><strong>Test Type:</strong> {}</p>",
        escape_html(&appointment.test_type)
    ));
    html.push_str(&format!(
        "<p><strong>Date:</strong> {}</p>",
        format_display_date(&appointment.date)
    ));
    html.push_str(&format!(
        "<p><strong>Time:</strong> {}</p>",
        escape_html(&appointment.time)
    ));
}

/// Formats a `YYYY-MM-DD` date as e.g. `Monday, January 5, 2026`.
///
/// Anything unparseable is shown exactly as submitted; a notification with
/// an odd-looking date still beats no notification.
fn format_display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => escape_html(raw),
    }
}

/// Escapes text for interpolation into an HTML body.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a free-text message and turns newlines into `<br>`.
fn message_html(message: &str) -> String {
    escape_html(message).replace('\n', "<br>")
}
