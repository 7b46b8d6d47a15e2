use crate::prelude::*;
use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

/// Draws random words from a list, never returning the same word twice.
pub struct WordPicker<R: Rng = ThreadRng> {
    words: Vec<String>,
    used: HashSet<String>,
    used_order: Vec<String>,
    rng: R,
}

impl WordPicker<ThreadRng> {
    pub fn new(words: Vec<String>) -> Self {
        Self::with_rng(words, rand::thread_rng())
    }
}

impl<R: Rng> WordPicker<R> {
    pub fn with_rng(words: Vec<String>, rng: R) -> Self {
        WordPicker {
            words,
            used: HashSet::new(),
            used_order: Vec::new(),
            rng,
        }
    }

    /// Picks a word that wasn't picked yet, uniformly among the remaining ones.
    /// Returns `None` once every word has been used.
    pub fn next_word(&mut self) -> Option<&str> {
        let available = self.words.iter().filter(|w| !self.used.contains(*w)).collect::<Vec<_>>();
        let word = (*available.choose(&mut self.rng)?).clone();
        self.used.insert(word.clone());
        self.used_order.push(word);
        self.used_order.last().map(String::as_str)
    }

    /// Words returned so far, in the order they were picked
    pub fn used_words(&self) -> &[String] {
        &self.used_order
    }

    pub fn remaining(&self) -> usize {
        self.words.iter().filter(|w| !self.used.contains(*w)).collect::<HashSet<_>>().len()
    }
}
