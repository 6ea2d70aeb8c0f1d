//! Word lists printed next to the grid.

use wordlace_core::fold;
use wordlace_generator::GeneratedPuzzle;

use crate::table::{HtmlTable, escape};

/// How to lay out a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordListOptions {
    /// Sort alphabetically, ignoring case and accents. Otherwise the input order
    /// is kept.
    pub sorted: bool,
    /// Number of groups the list is split into.
    pub columns: usize,
}

impl Default for WordListOptions {
    fn default() -> Self {
        Self {
            sorted: true,
            columns: 1,
        }
    }
}

/// Returns the placed words split into groups.
///
/// The list is cut into `options.columns` groups (at least one, at most one per
/// word) whose sizes differ by at most one; the earlier groups are the larger
/// ones.
///
/// # Examples
///
/// ```
/// use wordlace_render::word_list::chunk;
///
/// let words = ["a", "b", "c", "d", "e"];
/// assert_eq!(chunk(&words, 2), [&words[..3], &words[3..]]);
/// assert_eq!(chunk(&words, 9).len(), 5);
/// ```
#[must_use]
pub fn chunk<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    let columns = columns.clamp(1, items.len());
    let base = items.len() / columns;
    let extra = items.len() % columns;

    let mut groups = Vec::with_capacity(columns);
    let mut rest = items;
    for i in 0..columns {
        let (group, tail) = rest.split_at(base + usize::from(i < extra));
        groups.push(group);
        rest = tail;
    }
    groups
}

/// Returns the placed words' text, sorted if requested.
#[must_use]
pub fn word_texts<'a>(puzzle: &'a GeneratedPuzzle, options: &WordListOptions) -> Vec<&'a str> {
    let mut words: Vec<_> = puzzle.words().map(|word| word.text()).collect();
    if options.sorted {
        words.sort_by_cached_key(|text| (fold::sort_key(text), *text));
    }
    words
}

/// Renders the word list one word per line, groups following each other.
#[must_use]
pub fn word_list_as_text(puzzle: &GeneratedPuzzle, options: &WordListOptions) -> String {
    word_texts(puzzle, options).join("\n")
}

/// Renders the word list as a one-row table with one `<ul>` per group.
#[must_use]
pub fn word_list_as_html(puzzle: &GeneratedPuzzle, options: &WordListOptions) -> String {
    let words = word_texts(puzzle, options);
    let mut table = HtmlTable::new().with_attribute("class", "word-list");
    for (column, group) in chunk(&words, options.columns).into_iter().enumerate() {
        let items: String = group
            .iter()
            .map(|word| format!("<li>{}</li>", escape(word)))
            .collect();
        table.add_markup_cell(format!("<ul>{items}</ul>"), 0, column, [("class", "words")]);
    }
    table.to_string()
}
