//! REST API request handlers.

use axum::extract::{Path as AxumPath, State};
use axum::http::StatusCode;
use axum::response::Json;

use api_shared::{
    AppointmentPayload, BookingAccepted, HealthRes, HealthService, PostDetail, PostSummary,
    SiteInfo,
};
use springlab_content::ContentError;
use springlab_core::BookingError;

use crate::error::ApiError;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = AppointmentPayload,
    responses(
        (status = 201, description = "Appointment request accepted", body = BookingAccepted),
        (status = 400, description = "Validation failure with per-field details"),
        (status = 500, description = "Notification dispatch failure")
    )
)]
/// Accepts a booking submission from the website form
///
/// Re-validates the payload server-side, then dispatches the operator alert
/// and the requester confirmation email. Nothing is persisted; the operator
/// inbox is the system of record.
///
/// # Errors
/// Returns `400 Bad Request` listing every failing field if validation
/// fails, and `500 Internal Server Error` if either notification cannot be
/// dispatched.
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<AppointmentPayload>,
) -> Result<(StatusCode, Json<BookingAccepted>), ApiError> {
    match state.booking.submit(&payload).await {
        Ok(()) => Ok((StatusCode::CREATED, Json(BookingAccepted::received()))),
        Err(BookingError::Validation(details)) => Err(ApiError::Validation(details)),
        Err(BookingError::Dispatch(e)) => {
            tracing::error!("Appointment dispatch error: {:?}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "All well-formed posts, newest first", body = [PostSummary])
    )
)]
/// Lists blog posts
///
/// Malformed documents in the content directory are skipped, so this always
/// succeeds; an unreadable directory yields an empty list.
#[axum::debug_handler]
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostSummary>> {
    let posts = state.posts.load_all();
    Json(posts.iter().map(PostSummary::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(
        ("slug" = String, Path, description = "Post slug; the file stem of the document")
    ),
    responses(
        (status = 200, description = "The requested post with rendered body", body = PostDetail),
        (status = 404, description = "Unknown or malformed post")
    )
)]
/// Fetches a single blog post by slug
///
/// A document that exists but fails to parse is reported as missing; parse
/// details go to the log, not the caller.
#[axum::debug_handler]
pub async fn get_post(
    State(state): State<AppState>,
    AxumPath(slug): AxumPath<String>,
) -> Result<Json<PostDetail>, ApiError> {
    match state.posts.load(&slug) {
        Ok(post) => Ok(Json(PostDetail::from(&post))),
        Err(e) => {
            if !matches!(e, ContentError::NotFound(_)) {
                tracing::warn!("Post lookup failed: {}", e);
            }
            Err(ApiError::NotFound("Post not found".into()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/site",
    responses(
        (status = 200, description = "Static site metadata", body = SiteInfo)
    )
)]
/// Returns site metadata for the frontend
#[axum::debug_handler]
pub async fn site_info(State(state): State<AppState>) -> Json<SiteInfo> {
    Json(state.site.clone())
}
