//! Shared error base.
//!
//! Sub-crates define their own error enums and convert into `CoreError` via
//! `From` impls where it is useful, following the same pattern each crate in
//! this workspace repeats for its own error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
