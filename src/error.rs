//! The crate-wide error type and result alias.

use std::error::Error;

/// Result type that is being returned from methods that can fail and thus have [`SearchError`]s.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can result from building or querying the index.
// [`Error`] is public, but opaque and easy to keep compatible.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct SearchError(#[from] SearchErrorKind);

// Accessors for anything we do want to expose publicly.
impl SearchError {
    /// Expose the inner error kind.
    ///
    /// This is useful for matching on the error kind.
    pub fn into_inner(self) -> SearchErrorKind {
        self.0
    }
}

/// [`SearchErrorKind`] describes the errors that can happen while building the index.
///
/// This is a non-exhaustive enum, so additional variants may be added in future. It is
/// recommended to match against the wildcard `_` instead of listing all possible variants,
/// to avoid problems when new variants are added.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, displaydoc::Display)]
pub enum SearchErrorKind {
    /// An error occurred while reading from a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Document `{0}` was not found by the content source
    DocumentNotFound(String),
}

trait SearchErrorMarker: Error {}

impl<E> From<E> for SearchError
where
    E: SearchErrorMarker,
    SearchErrorKind: From<E>,
{
    fn from(value: E) -> Self {
        Self(SearchErrorKind::from(value))
    }
}
