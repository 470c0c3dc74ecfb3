//! Response shapes for the blog endpoints.
//!
//! Field names follow the website's JavaScript conventions (camelCase), and
//! dates are serialised in `YYYY-MM-DD` form.

use serde::Serialize;
use springlab_content::Post;
use utoipa::ToSchema;

/// One entry in the blog listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub reading_time_minutes: usize,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            date: post.date.to_string(),
            excerpt: post.excerpt.clone(),
            cover_image: post.cover_image.clone(),
            tags: post.tags.clone(),
            reading_time_minutes: post.reading_time_minutes(),
        }
    }
}

/// A single post with its body rendered to HTML.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub reading_time_minutes: usize,
    pub body_html: String,
}

impl From<&Post> for PostDetail {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            date: post.date.to_string(),
            excerpt: post.excerpt.clone(),
            cover_image: post.cover_image.clone(),
            tags: post.tags.clone(),
            reading_time_minutes: post.reading_time_minutes(),
            body_html: post.body_html(),
        }
    }
}
