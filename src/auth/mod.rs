//! Authentication token handling

pub mod token;

pub use token::{TokenSource, TokenStore};
