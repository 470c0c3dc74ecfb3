use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState};
use api_shared::SiteInfo;
use springlab_content::PostStore;
use springlab_core::{BookingConfig, BookingService};
use springlab_mailer::{HttpMailer, MailerConfig};

/// Main entry point for the SpringHealth Labs website backend
///
/// Starts the REST server and serves the appointment booking endpoint, the
/// blog content endpoints and Swagger documentation.
///
/// All configuration is read from the environment once, here; request
/// handlers receive resolved values and never touch environment variables.
///
/// # Environment Variables
/// - `SPRINGLAB_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `ADMIN_EMAIL`: Operator inbox for appointment alerts (required)
/// - `SITE_NAME`: Site name used in notification emails (default: "SpringHealth Lab")
/// - `MAIL_API_URL`: Transactional mail API endpoint (default: "http://127.0.0.1:8025/send")
/// - `MAIL_API_TOKEN`: Bearer token for the mail API (optional)
/// - `MAIL_SENDER`: From address for outgoing mail (default: "no-reply@springhealthlabs.com")
/// - `CONTENT_DIR`: Blog post directory (default: "content/posts")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration or server startup fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("springlab=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("SPRINGLAB_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let booking_config = BookingConfig::from_env_values(
        std::env::var("ADMIN_EMAIL").ok(),
        std::env::var("SITE_NAME").ok(),
    )?;
    let mailer_config = MailerConfig::from_env_values(
        std::env::var("MAIL_API_URL").ok(),
        std::env::var("MAIL_API_TOKEN").ok(),
        std::env::var("MAIL_SENDER").ok(),
    )?;
    let content_dir = std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content/posts".into());

    tracing::info!("++ Starting SpringHealth Labs API on {}", addr);

    let mailer = Arc::new(HttpMailer::new(mailer_config)?);
    let state = AppState {
        booking: BookingService::new(booking_config, mailer),
        posts: PostStore::new(content_dir),
        site: SiteInfo::default(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
