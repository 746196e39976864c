//! `littlesearch` builds an inverted keyword index for a small set of text
//! documents and answers two-keyword ranked queries against it.
//!
//! The work is split across four modules, bottom-up:
//!
//! *   `tokenize` normalizes raw tokens into keywords, filtering noise words.
//!
//! *   `index` scans one document into a keyword → occurrence map.
//!
//! *   `merge` folds per-document maps into the master index, keeping every
//!     keyword's occurrence list sorted by descending frequency.
//!
//! *   `search` answers "kw1 OR kw2" queries with a top-5 merge of two
//!     occurrence lists.
//!
//! `read` supplies the boring parts: the document list, the noise-word file,
//! and document content. The `run` function below wires it all together for
//! the command-line binary.

pub mod error;
pub mod index;
pub mod merge;
pub mod read;
pub mod search;
pub mod tokenize;

use std::io::{self, BufRead, Write};

use crate::error::SearchResult;
use crate::read::{read_document_list, read_noise_words, DirSource};
use crate::search::SearchEngine;

/// Build the index from a document-list file and a noise-word file, then
/// answer `kw1 kw2` query lines from stdin until it closes.
///
/// Document names from the list are resolved relative to `docs_dir`.
pub fn run(docs_file: String, noise_file: String, docs_dir: String) -> SearchResult<()> {
    let document_ids = read_document_list(&docs_file)?;
    let noise_words = read_noise_words(&noise_file)?;
    let source = DirSource::new(&docs_dir);

    let engine = SearchEngine::build_index(&source, &document_ids, noise_words)?;
    println!(
        "indexed {} documents, {} keywords",
        document_ids.len(),
        engine.keyword_count()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("query> ");
    stdout.flush().map_err(error::SearchErrorKind::Io)?;
    for line in stdin.lock().lines() {
        let line = line.map_err(error::SearchErrorKind::Io)?;
        let mut terms = line.split_whitespace();
        match (terms.next(), terms.next()) {
            (Some(kw1), kw2) => {
                let top = engine.top_five(kw1, kw2.unwrap_or(kw1));
                if top.is_empty() {
                    println!("no matches");
                } else {
                    println!("{}", top.join(" "));
                }
            }
            (None, _) => {}
        }
        print!("query> ");
        stdout.flush().map_err(error::SearchErrorKind::Io)?;
    }
    Ok(())
}
