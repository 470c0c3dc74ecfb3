//! # Springlab Content
//!
//! Blog content loading for the SpringHealth Labs site.
//!
//! Handles:
//! - Front-matter parsing (`front_matter`)
//! - Post records with reading-time estimates and HTML rendering (`post`)
//! - A directory-backed store with skip-and-log loading (`store`)
//!
//! **No API concerns**: HTTP routing and response shaping belong in
//! `api-rest` and `api-shared`.

pub mod front_matter;
pub mod post;
pub mod store;

pub use front_matter::{FrontMatter, FrontMatterError};
pub use post::{Post, WORDS_PER_MINUTE};
pub use store::{ContentError, ContentResult, FileScan, PostStore, RECOGNISED_EXTENSIONS};
