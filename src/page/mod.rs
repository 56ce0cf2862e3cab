//! Embedding page configuration
//!
//! The host page passes its configuration as URL query parameters. This
//! module turns them into a validated, immutable [`PageAttributes`] record.

pub mod attributes;
pub mod params;
pub mod repo;

pub use attributes::{PREFERRED_THEME_ID, PageAttributes, ThreadIdentity};
pub use params::deparam;
pub use repo::RepoSlug;
