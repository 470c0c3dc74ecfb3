//! # Springlab Mailer
//!
//! Outbound email dispatch for the SpringHealth Labs site.
//!
//! Handles:
//! - The [`Mailer`] trait that booking code depends on
//! - An HTTP implementation that posts JSON to a transactional mail API
//! - Mail API configuration resolved once at startup
//!
//! Recipient addresses never appear in log output; only delivery status and
//! the target URL are recorded.

use std::time::Duration;

use async_trait::async_trait;
use springlab_types::{EmailAddress, TextError};

/// Default mail API endpoint, suitable for a local development relay.
pub const DEFAULT_MAIL_API_URL: &str = "http://127.0.0.1:8025/send";

/// Default sender address when `MAIL_SENDER` is not configured.
pub const DEFAULT_SENDER: &str = "no-reply@springhealthlabs.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("invalid sender address: {0}")]
    InvalidSender(TextError),
    #[error("failed to reach mail API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail API rejected the message with status {status}")]
    Rejected { status: u16 },
}

pub type MailerResult<T> = std::result::Result<T, MailerError>;

/// A rendered email ready for dispatch.
#[derive(Clone, Debug)]
pub struct OutboundEmail {
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
}

/// Mail API settings, resolved once at startup.
///
/// Request handlers never read process-wide environment variables; the
/// binary gathers the raw values and passes them here.
#[derive(Clone, Debug)]
pub struct MailerConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub sender: EmailAddress,
}

impl MailerConfig {
    /// Builds a configuration from optional environment values.
    ///
    /// Unset or blank values fall back to [`DEFAULT_MAIL_API_URL`] and
    /// [`DEFAULT_SENDER`]. A sender address that fails to parse is a hard
    /// error: silently sending from a malformed address would get the whole
    /// domain flagged by receiving relays.
    pub fn from_env_values(
        api_url: Option<String>,
        api_token: Option<String>,
        sender: Option<String>,
    ) -> MailerResult<Self> {
        let api_url = api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MAIL_API_URL.to_owned());
        let api_token = api_token.filter(|token| !token.trim().is_empty());
        let sender = EmailAddress::parse(sender.as_deref().unwrap_or(DEFAULT_SENDER))
            .map_err(MailerError::InvalidSender)?;
        Ok(Self {
            api_url,
            api_token,
            sender,
        })
    }
}

/// Something that can deliver an [`OutboundEmail`].
///
/// Kept object-safe so services can hold an `Arc<dyn Mailer>` and tests can
/// substitute a recording fake.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> MailerResult<()>;
}

/// JSON body understood by the transactional mail API.
#[derive(serde::Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Dispatches email by POSTing JSON to an HTTP mail API.
#[derive(Clone, Debug)]
pub struct HttpMailer {
    client: reqwest::Client,
    config: MailerConfig,
}

impl HttpMailer {
    /// Creates a mailer with a connection-pooling client and a fixed
    /// request timeout.
    pub fn new(config: MailerConfig) -> MailerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// The configured sender address.
    pub fn sender(&self) -> &EmailAddress {
        &self.config.sender
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> MailerResult<()> {
        let payload = SendRequest {
            from: self.config.sender.as_str(),
            to: email.to.as_str(),
            subject: &email.subject,
            html: &email.html_body,
        };

        let mut request = self.client.post(&self.config.api_url).json(&payload);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %self.config.api_url,
                status = %status,
                "mail API rejected message"
            );
            return Err(MailerError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(url = %self.config.api_url, "mail dispatched");
        Ok(())
    }
}
