//! # API REST
//!
//! REST API implementation for the SpringHealth Labs website backend.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for the wire types and `springlab-core` for booking
//! semantics; handlers stay thin.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::SiteInfo;
use springlab_content::PostStore;
use springlab_core::BookingService;

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers:
/// the booking service for appointment submissions, the post store for blog
/// content, and the static site metadata.
#[derive(Clone)]
pub struct AppState {
    pub booking: BookingService,
    pub posts: PostStore,
    pub site: SiteInfo,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::create_appointment,
        handlers::list_posts,
        handlers::get_post,
        handlers::site_info,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::AppointmentPayload,
        api_shared::BookingAccepted,
        api_shared::PostSummary,
        api_shared::PostDetail,
        api_shared::SiteInfo,
        api_shared::site::ContactInfo,
        api_shared::site::OpeningHours,
        api_shared::site::SocialLinks,
        api_shared::site::NavLink,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with all routes, Swagger UI and CORS attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/appointments", post(handlers::create_appointment))
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/:slug", get(handlers::get_post))
        .route("/api/site", get(handlers::site_info))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use api_shared::ACCEPTED_MESSAGE;
    use springlab_core::BookingConfig;
    use springlab_mailer::{Mailer, MailerError, MailerResult, OutboundEmail};

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

    fn test_app(mailer: Arc<dyn Mailer>, content_dir: &Path) -> Router {
        let config =
            BookingConfig::from_env_values(Some("bookings@springhealthlabs.com".into()), None)
                .unwrap();
        build_router(AppState {
            booking: BookingService::new(config, mailer),
            posts: PostStore::new(content_dir),
            site: SiteInfo::default(),
        })
    }

    fn write_post(dir: &Path, file_name: &str, document: &str) {
        fs::write(dir.join(file_name), document).unwrap();
    }

    fn valid_booking_json() -> serde_json::Value {
        serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane.doe@example.com",
            "phone": "5551234567",
            "date": "2026-01-05",
            "time": "09:30",
            "testType": "Complete Blood Count",
        })
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: String) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let dir = TempDir::new().unwrap();
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["message"], "SpringHealth Labs API is alive");
    }

    #[tokio::test]
    async fn test_booking_accepted_with_two_notifications() {
        let dir = TempDir::new().unwrap();
        let mailer = Arc::new(RecordingMailer::default());
        let app = test_app(mailer.clone(), dir.path());

        let response =
            post_json(app, "/api/appointments", valid_booking_json().to_string()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], ACCEPTED_MESSAGE);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to.as_str(), "bookings@springhealthlabs.com");
        assert_eq!(sent[0].subject, "New Appointment Request: Jane Doe");
        assert_eq!(sent[1].to.as_str(), "jane.doe@example.com");
        assert_eq!(sent[1].subject, "Your Appointment Request - SpringHealth Lab");
    }

    #[tokio::test]
    async fn test_booking_rejects_invalid_fields_without_sending() {
        let dir = TempDir::new().unwrap();
        let mailer = Arc::new(RecordingMailer::default());
        let app = test_app(mailer.clone(), dir.path());

        let mut payload = valid_booking_json();
        payload["firstName"] = "J".into();
        payload["email"] = "not-an-address".into();

        let response = post_json(app, "/api/appointments", payload.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid input");
        assert_eq!(
            body["details"]["firstName"][0],
            "First name must be at least 2 characters"
        );
        assert_eq!(
            body["details"]["email"][0],
            "Please enter a valid email address"
        );
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_booking_missing_fields_are_reported_by_name() {
        let dir = TempDir::new().unwrap();
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = post_json(app, "/api/appointments", "{}".into()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let details = body["details"].as_object().unwrap();
        for field in [
            "firstName",
            "lastName",
            "email",
            "phone",
            "date",
            "time",
            "testType",
        ] {
            assert!(details.contains_key(field), "missing entry for {field}");
        }
    }

    #[tokio::test]
    async fn test_booking_dispatch_failure_returns_internal_error() {
        let dir = TempDir::new().unwrap();
        let app = test_app(Arc::new(FailingMailer), dir.path());

        let response =
            post_json(app, "/api/appointments", valid_booking_json().to_string()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "mail API rejected the message with status 502"
        );
    }

    #[tokio::test]
    async fn test_booking_malformed_json_is_client_error() {
        let dir = TempDir::new().unwrap();
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = post_json(app, "/api/appointments", "{not json".into()).await;
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_list_posts_newest_first_skipping_malformed() {
        let dir = TempDir::new().unwrap();
        write_post(
            dir.path(),
            "older.md",
            "---\ntitle: Older\ndate: 2026-01-05\nexcerpt: First one\n---\n\nBody.\n",
        );
        write_post(
            dir.path(),
            "newer.md",
            "---\ntitle: Newer\ndate: 2026-02-01\nexcerpt: Second one\n---\n\nBody.\n",
        );
        write_post(dir.path(), "broken.md", "no front matter here\n");
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = get(app, "/api/posts").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["slug"], "newer");
        assert_eq!(posts[1]["slug"], "older");
        assert_eq!(posts[0]["title"], "Newer");
        assert_eq!(posts[0]["date"], "2026-02-01");
        assert!(posts[0]["readingTimeMinutes"].as_u64().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_get_post_renders_body_html() {
        let dir = TempDir::new().unwrap();
        write_post(
            dir.path(),
            "fasting-guide.md",
            "---\ntitle: Fasting Guide\ndate: 2026-01-05\nexcerpt: How to prepare\n---\n\nDrink **water** only.\n",
        );
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = get(app, "/api/posts/fasting-guide").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["slug"], "fasting-guide");
        assert_eq!(body["title"], "Fasting Guide");
        assert!(body["bodyHtml"]
            .as_str()
            .unwrap()
            .contains("<strong>water</strong>"));
    }

    #[tokio::test]
    async fn test_get_post_unknown_slug_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = get(app, "/api/posts/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Post not found");
    }

    #[tokio::test]
    async fn test_get_post_malformed_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "broken.md", "---\ntitle: Broken\n---\n\nBody.\n");
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = get(app, "/api/posts/broken").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_site_info_reports_configured_metadata() {
        let dir = TempDir::new().unwrap();
        let app = test_app(Arc::new(RecordingMailer::default()), dir.path());

        let response = get(app, "/api/site").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "SpringQuest Health Management Ltd");
        assert_eq!(body["contact"]["email"], "info@springhealthlabs.com");
        assert_eq!(body["navLinks"].as_array().unwrap().len(), 5);
    }
}
