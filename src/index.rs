//! The in-memory keyword index and per-document extraction.

use std::collections::HashMap;

use crate::error::SearchResult;
use crate::read::ContentSource;
use crate::tokenize::NoiseWords;

/// A record indicating that a particular document contains a keyword and how
/// many times it appears there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Identifier of the document, as listed in the document list.
    pub document: String,
    /// Number of appearances of the keyword in the document, at least 1.
    pub frequency: u32,
}

/// The master index: each keyword maps to its occurrence list, kept in
/// non-increasing order of frequency by the merge step. A document appears at
/// most once per list.
pub type KeywordIndex = HashMap<String, Vec<Occurrence>>;

/// Scan one document and count its keyword occurrences.
///
/// The document's text comes from the `ContentSource` collaborator; its
/// whitespace-delimited tokens are normalized through `noise`. Tokens that
/// fail normalization are skipped, so a document with stray non-keyword text
/// still contributes all of its valid keywords. An unknown document id is a
/// hard error.
pub fn extract<S: ContentSource>(
    source: &S,
    noise: &NoiseWords,
    doc_id: &str,
) -> SearchResult<HashMap<String, Occurrence>> {
    let text = source.read_document(doc_id)?;

    let mut map: HashMap<String, Occurrence> = HashMap::new();
    for token in text.split_whitespace() {
        let Some(keyword) = noise.normalize(token) else {
            continue;
        };
        map.entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence {
                document: doc_id.to_string(),
                frequency: 1,
            });
    }
    Ok(map)
}
