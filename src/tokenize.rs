//! Turning raw tokens into keywords.
//!
//! A keyword is a lower-cased, purely alphabetic word that is not in the
//! noise-word set. Trailing punctuation (`.` `,` `?` `:` `;` `!`) is stripped
//! before the word is judged; anything else non-alphabetic disqualifies it.

use std::collections::HashSet;

/// Punctuation characters that may legitimately trail a word.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// The set of noise words, loaded once before any document is indexed and
/// immutable afterwards.
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    /// Build the noise-word set from whatever the noise-word reader produced.
    pub fn new(words: HashSet<String>) -> NoiseWords {
        NoiseWords { words }
    }

    /// Normalize a raw token into a keyword, or reject it with `None`.
    ///
    /// The token is lower-cased and stripped of trailing punctuation, one
    /// character at a time, as long as more than one character remains. The
    /// result is a keyword only if every remaining character is alphabetic
    /// and it is not a noise word.
    ///
    /// This is a total function: any input yields either a keyword or `None`,
    /// never an error.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let mut word = token.to_lowercase();

        while word.chars().count() > 1 {
            let last = word.chars().next_back()?;
            if !TRAILING_PUNCTUATION.contains(&last) {
                break;
            }
            word.pop();
        }

        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return None;
        }
        if self.words.contains(&word) {
            return None;
        }
        Some(word)
    }
}
