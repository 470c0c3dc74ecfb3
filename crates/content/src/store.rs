//! Directory-backed post store.
//!
//! Each post is a single `.md` or `.mdx` file whose stem is the post slug.
//! Loading is deliberately forgiving at the collection level: one malformed
//! document must never take the whole blog listing down, so per-file
//! failures are logged and skipped. Loading a single post by slug reports
//! the failure instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::front_matter::{self, FrontMatterError};
use crate::post::Post;

/// File extensions recognised as blog documents.
pub const RECOGNISED_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),
    #[error("post not found: {0}")]
    NotFound(String),
    #[error("failed to read content directory {0}: {1}")]
    DirRead(PathBuf, io::Error),
    #[error("failed to read post file: {0}")]
    FileRead(io::Error),
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] FrontMatterError),
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;

/// Outcome of loading one file during a directory scan.
#[derive(Debug)]
pub struct FileScan {
    pub file_name: String,
    pub outcome: ContentResult<Post>,
}

/// Loads blog posts from a directory of markdown documents.
#[derive(Clone, Debug)]
pub struct PostStore {
    directory: PathBuf,
}

impl PostStore {
    /// Creates a store over the given directory.
    ///
    /// The directory is not required to exist yet; a missing directory
    /// behaves like an empty one when listing.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory this store reads from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Loads a single post by slug.
    ///
    /// The slug may be given with or without a recognised extension;
    /// `fasting-guide` and `fasting-guide.mdx` find the same document.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the slug is empty or contains path separators or parent references,
    /// - no document with that slug exists, or
    /// - the document exists but cannot be read or parsed.
    pub fn load(&self, slug: &str) -> ContentResult<Post> {
        let slug = normalise_slug(slug)?;
        for extension in RECOGNISED_EXTENSIONS {
            let path = self.directory.join(format!("{slug}.{extension}"));
            match fs::read_to_string(&path) {
                Ok(document) => return build_post(slug, &document),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ContentError::FileRead(e)),
            }
        }
        Err(ContentError::NotFound(slug))
    }

    /// Reads every recognised document in the directory and reports the
    /// per-file outcome, ordered by file name.
    ///
    /// # Errors
    /// Returns an error if the directory itself cannot be read.
    pub fn scan(&self) -> ContentResult<Vec<FileScan>> {
        let entries = fs::read_dir(&self.directory)
            .map_err(|e| ContentError::DirRead(self.directory.clone(), e))?;

        let mut scans = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !is_recognised(&path) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(stem)
                .to_owned();
            let outcome = fs::read_to_string(&path)
                .map_err(ContentError::FileRead)
                .and_then(|document| build_post(stem.to_owned(), &document));
            scans.push(FileScan { file_name, outcome });
        }
        scans.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(scans)
    }

    /// Loads every well-formed post, newest first; posts sharing a date are
    /// ordered by slug.
    ///
    /// Malformed documents are logged as warnings and skipped. An unreadable
    /// or missing directory yields an empty list.
    pub fn load_all(&self) -> Vec<Post> {
        let scans = match self.scan() {
            Ok(scans) => scans,
            Err(e) => {
                tracing::warn!("failed to read content directory: {}", e);
                return Vec::new();
            }
        };

        let mut posts: Vec<Post> = scans
            .into_iter()
            .filter_map(|scan| match scan.outcome {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", scan.file_name, e);
                    None
                }
            })
            .collect();

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        posts
    }
}

fn build_post(slug: String, document: &str) -> ContentResult<Post> {
    let (meta, body) = front_matter::parse(document)?;
    Ok(Post {
        slug,
        title: meta.title,
        date: meta.date,
        excerpt: meta.excerpt,
        cover_image: meta.cover_image,
        tags: meta.tags,
        body,
    })
}

fn is_recognised(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| RECOGNISED_EXTENSIONS.contains(&extension))
}

fn normalise_slug(raw: &str) -> ContentResult<String> {
    let mut slug = raw;
    for extension in RECOGNISED_EXTENSIONS {
        if let Some(stripped) = slug.strip_suffix(&format!(".{extension}")) {
            slug = stripped;
            break;
        }
    }
    if slug.is_empty() || slug.contains('/') || slug.contains('\\') || slug.contains("..") {
        return Err(ContentError::InvalidSlug(raw.to_owned()));
    }
    Ok(slug.to_owned())
}
