//! Case and diacritic folding.
//!
//! Puzzle letters are uppercase and, apart from a small allow-list of letters that
//! a language treats as distinct (by default `Ñ` and `Ç`), free of accents. The
//! fold uses a fixed substitution table so the result never depends on the host
//! locale or Unicode tables.

/// Letter folding rules for word normalization.
///
/// # Examples
///
/// ```
/// use wordlace_core::LetterFolding;
///
/// let folding = LetterFolding::default();
/// assert_eq!(folding.normalize("Pingüino-Ñandú!"), "PINGUINOÑANDU");
///
/// let strict = LetterFolding::new([]);
/// assert_eq!(strict.normalize("Año"), "ANO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFolding {
    preserved: Vec<char>,
}

impl Default for LetterFolding {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRESERVED)
    }
}

impl LetterFolding {
    /// Letters kept as-is unless configured otherwise.
    pub const DEFAULT_PRESERVED: [char; 2] = ['Ñ', 'Ç'];

    /// Creates folding rules that keep the given letters unchanged.
    ///
    /// Letters are compared after uppercasing, so `ñ` and `Ñ` are equivalent here.
    #[must_use]
    pub fn new(preserved: impl IntoIterator<Item = char>) -> Self {
        Self {
            preserved: preserved.into_iter().flat_map(char::to_uppercase).collect(),
        }
    }

    /// Returns the preserved letters in uppercase.
    #[must_use]
    pub fn preserved(&self) -> &[char] {
        &self.preserved
    }

    /// Uppercases `text`, folds diacritics and drops everything that is not a
    /// letter or a digit.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .flat_map(char::to_uppercase)
            .map(|c| {
                if self.preserved.contains(&c) {
                    c
                } else {
                    fold_diacritic(c)
                }
            })
            .filter(|c| c.is_alphanumeric())
            .collect()
    }
}

/// Returns the key used to sort words for display.
///
/// The key lowercases and folds every accented letter, preserved or not, so that
/// `Ángel` sorts next to `Angel` instead of after `Zorro`.
#[must_use]
pub fn sort_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .map(fold_diacritic)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Folds an uppercase accented letter to its base letter.
///
/// Characters outside the table are returned unchanged.
#[must_use]
pub fn fold_diacritic(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'Ď' | 'Đ' => 'D',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'Ł' | 'Ĺ' | 'Ļ' | 'Ľ' => 'L',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => 'O',
        'Ŕ' | 'Ř' => 'R',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => 'S',
        'Ţ' | 'Ť' => 'T',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'Ý' | 'Ÿ' | 'Ŷ' => 'Y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_folds() {
        let folding = LetterFolding::default();
        assert_eq!(folding.normalize("crosswords"), "CROSSWORDS");
        assert_eq!(folding.normalize("  Émile Zola "), "EMILEZOLA");
        assert_eq!(folding.normalize("l'été"), "LETE");
        assert_eq!(folding.normalize("año 2024"), "AÑO2024");
        assert_eq!(folding.normalize("garçon"), "GARÇON");
        assert_eq!(folding.normalize("--"), "");
    }

    #[test]
    fn test_preserved_letters_are_configurable() {
        let folding = LetterFolding::new(['ö']);
        assert_eq!(folding.preserved(), ['Ö']);
        assert_eq!(folding.normalize("Öl Ñu"), "ÖLNU");
    }

    #[test]
    fn test_sort_key_folds_everything() {
        assert_eq!(sort_key("Ñandú"), "nandu");
        assert_eq!(sort_key("ÁRBOL"), "arbol");
        assert!(sort_key("Ángel") < sort_key("Zorro"));
    }

    #[test]
    fn test_fold_diacritic_passthrough() {
        assert_eq!(fold_diacritic('Q'), 'Q');
        assert_eq!(fold_diacritic('7'), '7');
        assert_eq!(fold_diacritic('Ű'), 'U');
    }
}
