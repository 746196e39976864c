//! The I/O collaborators: document list, noise words, and document content.
//!
//! These are deliberately thin. The interesting work happens in `index`,
//! `merge`, and `search`; this module only gets text off the disk and into
//! them.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{SearchErrorKind, SearchResult};

/// Read the ordered list of document names from a file.
///
/// Names are whitespace-separated; the build phase indexes them in exactly
/// this order.
pub fn read_document_list<P: AsRef<Path>>(path: P) -> SearchResult<Vec<String>> {
    let text = fs::read_to_string(path).map_err(SearchErrorKind::Io)?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Read the noise-word file into a set. Order is irrelevant.
pub fn read_noise_words<P: AsRef<Path>>(path: P) -> SearchResult<HashSet<String>> {
    let text = fs::read_to_string(path).map_err(SearchErrorKind::Io)?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Where document content comes from.
///
/// The indexer only ever asks for a document's full text by id; anything that
/// can answer that is a valid corpus.
pub trait ContentSource {
    /// The text of the document with the given id.
    ///
    /// Fails with [`SearchErrorKind::DocumentNotFound`] if the id does not
    /// name a document this source knows.
    fn read_document(&self, doc_id: &str) -> SearchResult<String>;
}

/// A corpus of text files under a base directory; document ids are file names
/// relative to it.
pub struct DirSource {
    base: PathBuf,
}

impl DirSource {
    /// A source rooted at `base`.
    pub fn new<P: AsRef<Path>>(base: P) -> DirSource {
        DirSource {
            base: base.as_ref().to_owned(),
        }
    }
}

impl ContentSource for DirSource {
    fn read_document(&self, doc_id: &str) -> SearchResult<String> {
        match fs::read_to_string(self.base.join(doc_id)) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(SearchErrorKind::DocumentNotFound(doc_id.to_string()).into())
            }
            Err(err) => Err(SearchErrorKind::Io(err).into()),
        }
    }
}

/// An in-memory corpus, mainly for tests.
#[derive(Default)]
pub struct MemorySource {
    docs: HashMap<String, String>,
}

impl MemorySource {
    /// Add a document, replacing any previous text under the same id.
    pub fn insert(&mut self, doc_id: &str, text: &str) {
        self.docs.insert(doc_id.to_string(), text.to_string());
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> MemorySource {
        let mut source = MemorySource::default();
        for (doc_id, text) in iter {
            source.insert(doc_id, text);
        }
        source
    }
}

impl ContentSource for MemorySource {
    fn read_document(&self, doc_id: &str) -> SearchResult<String> {
        self.docs
            .get(doc_id)
            .cloned()
            .ok_or_else(|| SearchErrorKind::DocumentNotFound(doc_id.to_string()).into())
    }
}
