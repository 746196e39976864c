//! End-to-end tests: build an index from a corpus, then query it.

use std::collections::HashSet;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use littlesearch::error::SearchErrorKind;
use littlesearch::read::{read_document_list, read_noise_words, DirSource, MemorySource};
use littlesearch::search::SearchEngine;

fn noise(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn ids(docs: &[&str]) -> Vec<String> {
    docs.iter().map(|d| d.to_string()).collect()
}

#[test]
fn builds_and_answers_ranked_queries() {
    let source = MemorySource::from_iter([
        ("d1", "The quick brown fox jumps over the lazy dog."),
        ("d2", "A dog! A dog! My kingdom for a dog."),
        ("d3", "Foxes are quick; dogs are quicker."),
    ]);
    let engine =
        SearchEngine::build_index(&source, &ids(&["d1", "d2", "d3"]), noise(&["the", "a", "my"]))
            .unwrap();

    // d2 mentions "dog" three times, d1 once; d3 has "fox" only in plural.
    assert_eq!(engine.top_five("dog", "fox"), vec!["d2", "d1"]);
    assert_eq!(engine.top_five("quick", "kingdom"), vec!["d1", "d3", "d2"]);
    assert_eq!(engine.top_five("zzz", "yyy"), Vec::<String>::new());
}

#[test]
fn occurrence_lists_stay_sorted_and_deduplicated() {
    let source = MemorySource::from_iter([
        ("a", "cat cat"),
        ("b", "cat cat cat cat cat cat cat cat cat"),
        ("c", "cat cat cat cat cat"),
    ]);
    let engine = SearchEngine::build_index(&source, &ids(&["a", "b", "c"]), noise(&[])).unwrap();

    let list = engine.occurrences("cat").unwrap();
    let freqs: Vec<u32> = list.iter().map(|o| o.frequency).collect();
    let docs: Vec<&str> = list.iter().map(|o| o.document.as_str()).collect();
    assert_eq!(freqs, vec![9, 5, 2]);
    assert_eq!(docs, vec!["b", "c", "a"]);
}

#[test]
fn unreadable_document_aborts_the_build() {
    let source = MemorySource::from_iter([("d1", "alpha")]);
    let err = SearchEngine::build_index(&source, &ids(&["d1", "ghost"]), noise(&[])).unwrap_err();
    assert!(matches!(
        err.into_inner(),
        SearchErrorKind::DocumentNotFound(doc) if doc == "ghost"
    ));
}

#[test]
fn reads_corpus_files_from_disk() {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("littlesearch-test-{stamp}"));
    fs::create_dir(&dir).unwrap();

    fs::write(dir.join("docs.txt"), "one.txt two.txt").unwrap();
    fs::write(dir.join("noise.txt"), "the of and").unwrap();
    fs::write(dir.join("one.txt"), "the owl and the nightingale").unwrap();
    fs::write(dir.join("two.txt"), "Owl! owl? owl.").unwrap();

    let document_ids = read_document_list(dir.join("docs.txt")).unwrap();
    assert_eq!(document_ids, vec!["one.txt", "two.txt"]);
    let noise_words = read_noise_words(dir.join("noise.txt")).unwrap();
    assert!(noise_words.contains("and"));

    let source = DirSource::new(&dir);
    let engine = SearchEngine::build_index(&source, &document_ids, noise_words).unwrap();
    assert_eq!(engine.top_five("owl", "nightingale"), vec!["two.txt", "one.txt"]);

    fs::remove_dir_all(&dir).unwrap();
}
