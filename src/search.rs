//! The query side: building an engine and answering top-5 searches.

use std::collections::HashSet;

use crate::error::SearchResult;
use crate::index::{extract, KeywordIndex, Occurrence};
use crate::merge::merge_document;
use crate::read::ContentSource;
use crate::tokenize::NoiseWords;

/// How many documents a query may return at most.
const TOP_LIMIT: usize = 5;

/// A fully built, immutable keyword index.
///
/// All mutation happens inside [`SearchEngine::build_index`]; the engine it
/// returns only ever reads the index, so it can be shared freely between
/// query callers.
#[derive(Debug)]
pub struct SearchEngine {
    index: KeywordIndex,
}

impl SearchEngine {
    /// Index every document in `document_ids`, in order, and return the
    /// finished engine.
    ///
    /// The noise-word set is fixed before the first document is scanned. A
    /// document the `ContentSource` cannot locate aborts the build; the
    /// caller must supply a valid document list.
    pub fn build_index<S: ContentSource>(
        source: &S,
        document_ids: &[String],
        noise_words: HashSet<String>,
    ) -> SearchResult<SearchEngine> {
        let noise = NoiseWords::new(noise_words);
        let mut index = KeywordIndex::new();

        for doc_id in document_ids {
            let per_doc = extract(source, &noise, doc_id)?;
            merge_document(&mut index, per_doc);
        }

        Ok(SearchEngine { index })
    }

    /// Number of distinct keywords in the index.
    pub fn keyword_count(&self) -> usize {
        self.index.len()
    }

    /// The occurrence list for a keyword, if it is indexed at all.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.index.get(keyword).map(Vec::as_slice)
    }

    /// Documents matching `kw1` or `kw2`, best frequencies first, at most
    /// five and each document only once.
    ///
    /// Both terms are lower-cased and looked up directly; an unknown term is
    /// simply an empty list, not an error, so the result may be empty.
    ///
    /// The two occurrence lists are already sorted by descending frequency,
    /// so they are merged with two pointers: the higher-frequency head wins
    /// each round, a frequency tie goes to `kw1`, and a document already in
    /// the result is skipped when it surfaces again from the other list.
    pub fn top_five(&self, kw1: &str, kw2: &str) -> Vec<String> {
        let list1 = self.lookup(kw1);
        let list2 = self.lookup(kw2);

        let mut top: Vec<String> = Vec::with_capacity(TOP_LIMIT);
        let mut i = 0;
        let mut j = 0;

        while top.len() < TOP_LIMIT && (i < list1.len() || j < list2.len()) {
            let chosen = match (list1.get(i), list2.get(j)) {
                (Some(o1), Some(o2)) => {
                    if o1.frequency >= o2.frequency {
                        i += 1;
                        o1
                    } else {
                        j += 1;
                        o2
                    }
                }
                (Some(o1), None) => {
                    i += 1;
                    o1
                }
                (None, Some(o2)) => {
                    j += 1;
                    o2
                }
                (None, None) => break,
            };
            if !top.contains(&chosen.document) {
                top.push(chosen.document.clone());
            }
        }
        top
    }

    fn lookup(&self, keyword: &str) -> &[Occurrence] {
        self.index
            .get(&keyword.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
