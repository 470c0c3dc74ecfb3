//! Front-matter parsing for blog documents.
//!
//! A document is expected to open with a `---` fence on its first line,
//! followed by `key: value` metadata lines and a closing `---` fence; the
//! rest of the file is the markdown body. `title`, `date` and `excerpt`
//! are required, `coverImage` and `tags` are optional, and unknown keys
//! are ignored so authors can annotate documents freely.

use chrono::NaiveDate;

const FENCE: &str = "---";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FrontMatterError {
    #[error("document does not begin with a front-matter fence")]
    MissingOpeningFence,
    #[error("front-matter fence is never closed")]
    UnclosedFence,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// Parsed metadata from a document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
}

/// Splits a raw document into its front matter and trimmed body.
///
/// # Errors
/// Returns an error if:
/// - the first line is not a `---` fence,
/// - the closing fence never appears,
/// - `title`, `date` or `excerpt` is absent or empty, or
/// - the date is not a valid `YYYY-MM-DD` calendar date.
pub fn parse(document: &str) -> Result<(FrontMatter, String), FrontMatterError> {
    let mut lines = document.lines();
    if lines.next() != Some(FENCE) {
        return Err(FrontMatterError::MissingOpeningFence);
    }

    let mut title: Option<String> = None;
    let mut date_raw: Option<String> = None;
    let mut excerpt: Option<String> = None;
    let mut cover_image: Option<String> = None;
    let mut tags: Vec<String> = Vec::new();
    let mut closed = false;

    for line in lines.by_ref() {
        if line == FENCE {
            closed = true;
            break;
        }
        // Lines without a separator carry no metadata.
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = strip_quotes(value.trim());
        match key.trim() {
            "title" => title = Some(value.to_owned()),
            "date" => date_raw = Some(value.to_owned()),
            "excerpt" => excerpt = Some(value.to_owned()),
            "coverImage" => cover_image = Some(value.to_owned()),
            "tags" => tags = parse_tags(value),
            _ => {}
        }
    }
    if !closed {
        return Err(FrontMatterError::UnclosedFence);
    }

    let title = require("title", title)?;
    let date_raw = require("date", date_raw)?;
    let date = NaiveDate::parse_from_str(&date_raw, DATE_FORMAT)
        .map_err(|_| FrontMatterError::InvalidDate { value: date_raw })?;
    let excerpt = require("excerpt", excerpt)?;

    let body = lines.collect::<Vec<_>>().join("\n");
    Ok((
        FrontMatter {
            title,
            date,
            excerpt,
            cover_image: cover_image.filter(|image| !image.is_empty()),
            tags,
        },
        body.trim().to_owned(),
    ))
}

fn require(field: &'static str, value: Option<String>) -> Result<String, FrontMatterError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FrontMatterError::MissingField(field)),
    }
}

/// Removes one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parses a `[a, b, c]` style tag list. Brackets and per-element quotes are
/// removed; empty elements are dropped.
fn parse_tags(value: &str) -> Vec<String> {
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|tag| strip_quotes(tag.trim()).to_owned())
        .filter(|tag| !tag.is_empty())
        .collect()
}
