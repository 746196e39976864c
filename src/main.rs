//! Command-line front end for `littlesearch`.
//!
//! Takes a document-list file and a noise-word file, builds the keyword index
//! once, and then answers `kw1 kw2` queries read from stdin, printing up to
//! five matching documents per query in descending order of frequency.

use argparse::{ArgumentParser, Store};
use littlesearch::run;

fn main() {
    let mut docs_file = String::new();
    let mut noise_file = String::new();
    let mut docs_dir = String::from(".");

    {
        let mut ap = ArgumentParser::new();
        ap.set_description(
            "Build a keyword index over a document set and answer \
             two-keyword top-5 queries.",
        );
        _ = ap.refer(&mut docs_file).add_argument(
            "docs-file",
            Store,
            "File listing the document names to index, in order.",
        ).required();
        _ = ap.refer(&mut noise_file).add_argument(
            "noise-file",
            Store,
            "File listing noise words to exclude from indexing.",
        ).required();
        _ = ap.refer(&mut docs_dir).add_option(
            &["-d", "--docs-dir"],
            Store,
            "Directory the document names are resolved against \
             (defaults to the current directory).",
        );
        ap.parse_args_or_exit();
    }

    match run(docs_file, noise_file, docs_dir) {
        Ok(()) => {}
        Err(err) => println!("error: {err}"),
    }
}
