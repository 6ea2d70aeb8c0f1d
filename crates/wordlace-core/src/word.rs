//! Puzzle words.

use crate::LetterFolding;

/// Identifies a word within one generation run.
///
/// The id is the word's index in the prepared word list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("#{_0}")]
pub struct WordId(usize);

impl WordId {
    /// Creates an id from a list index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the list index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A word as given by the caller together with its normalized letters.
///
/// # Examples
///
/// ```
/// use wordlace_core::{LetterFolding, Word};
///
/// let word = Word::new("Café crème", &LetterFolding::default());
/// assert_eq!(word.text(), "Café crème");
/// assert_eq!(word.normalized(), "CAFECREME");
/// assert_eq!(word.len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    normalized: String,
    letters: Vec<char>,
}

impl Word {
    /// Normalizes `text` with `folding`.
    #[must_use]
    pub fn new(text: &str, folding: &LetterFolding) -> Self {
        let text = text.trim().to_owned();
        let normalized = folding.normalize(&text);
        let letters = normalized.chars().collect();
        Self {
            text,
            normalized,
            letters,
        }
    }

    /// Returns the original text, trimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the normalized text.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns the normalized letters.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the number of normalized letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if normalization left no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_letters_not_bytes() {
        let word = Word::new("ñoño", &LetterFolding::default());
        assert_eq!(word.normalized(), "ÑOÑO");
        assert_eq!(word.len(), 4);
        assert_eq!(word.letters(), ['Ñ', 'O', 'Ñ', 'O']);
    }

    #[test]
    fn test_empty_after_normalization() {
        let word = Word::new(" -- ", &LetterFolding::default());
        assert!(word.is_empty());
        assert_eq!(word.text(), "--");
    }

    #[test]
    fn test_word_id_display() {
        assert_eq!(WordId::new(3).to_string(), "#3");
        assert_eq!(WordId::new(3).index(), 3);
    }
}
