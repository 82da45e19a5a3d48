//! Word-frequency counting on top of `HashTable`.

use crate::hash_element::{hash_str, HashElement};
use crate::hash_table::{HashTable, TableError};
use log::trace;

/// A word and how many times it has been seen. Keyed on the word only.
#[derive(Debug, Clone)]
pub struct WordCount {
    word: String,
    count: u64,
}

/// Same identity as `HashElement::equals`: the count is not compared.
impl PartialEq for WordCount {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordCount {}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }
    pub fn count(&self) -> u64 {
        self.count
    }
    pub fn set_count(&mut self, count: u64) {
        self.count = count;
    }
    pub fn increment(&mut self) {
        self.count += 1;
    }
}

impl HashElement for WordCount {
    fn equals(&self, other: &Self) -> bool {
        self.word == other.word
    }

    /// Panics on an empty word.
    fn hash_code(&self) -> u32 {
        hash_str(&self.word)
    }
}

/// Read-only lookups by word.
pub trait WordCounts {
    fn get_word(&self, word: &str) -> Option<&WordCount>;

    /// Occurrences of `word`, 0 when it never appeared.
    fn count_of(&self, word: &str) -> u64 {
        self.get_word(word).map(WordCount::count).unwrap_or(0)
    }
}

impl WordCounts for HashTable<WordCount> {
    fn get_word(&self, word: &str) -> Option<&WordCount> {
        if word.is_empty() {
            return None;
        }
        self.find_by(hash_str(word), |wc| wc.word == word)
    }
}

/// Count each token into `table`: bump the stored entry when the word is
/// known, otherwise add it with a count of 1.
///
/// Returns how many distinct words were new to the table. Panics on an
/// empty token.
pub fn tally<I>(table: &mut HashTable<WordCount>, tokens: I) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = 0usize;
    let mut added = 0usize;
    for token in tokens {
        let token = token.as_ref();
        let code = hash_str(token);
        seen += 1;
        match table.find_by_mut(code, |wc| wc.word == token) {
            Some(wc) => wc.increment(),
            None => {
                table.add(WordCount::new(token, 1));
                added += 1;
            }
        }
    }
    trace!("tallied {seen} tokens, {added} new words");
    added
}

/// Count `tokens` into a fresh table sized from the token count, which is
/// an upper bound on the number of distinct words.
pub fn count_words<S: AsRef<str>>(tokens: &[S]) -> Result<HashTable<WordCount>, TableError> {
    let mut table = HashTable::with_expected_size(tokens.len().max(1))?;
    tally(&mut table, tokens);
    Ok(table)
}
