//! Blog post records and rendering helpers.

use chrono::NaiveDate;

/// Reading speed assumed by [`Post::reading_time_minutes`].
pub const WORDS_PER_MINUTE: usize = 200;

/// A fully loaded blog post.
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    /// Raw markdown body, fences and front matter already removed.
    pub body: String,
}

impl Post {
    /// Estimated reading time in whole minutes, never less than one.
    pub fn reading_time_minutes(&self) -> usize {
        let words = self.body.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// Renders the markdown body to HTML.
    pub fn body_html(&self) -> String {
        let parser = pulldown_cmark::Parser::new(&self.body);
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, parser);
        html
    }
}
