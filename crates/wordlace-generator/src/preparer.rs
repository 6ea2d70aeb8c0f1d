//! Word preparation: normalization, sampling and length validation.

use wordlace_core::{LetterFolding, Word};

use crate::{
    DEFAULT_WORD_CAP, DifficultyProfile, GenerateError, GenerationLimits, GenerationWarning, Prng,
};

/// Input of [`prepare_words`] beyond the words themselves.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrepareOptions<'a> {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) number_of_words: usize,
    pub(crate) profile: DifficultyProfile,
    pub(crate) folding: &'a LetterFolding,
    pub(crate) limits: &'a GenerationLimits,
}

/// Normalizes the raw words and picks the ones to place.
///
/// Words without letters and repeated words are skipped with a warning. If more
/// words are available than requested (or than [`DEFAULT_WORD_CAP`] when the
/// request is `0`), a random subset honoring the difficulty's length bounds is
/// drawn. Selected words keep their input order.
///
/// # Errors
///
/// Returns one [`GenerateError::WordTooLong`] per selected word that fits in
/// neither dimension, or [`GenerateError::NoWords`] if nothing is left.
pub(crate) fn prepare_words<S>(
    raw: &[S],
    options: &PrepareOptions<'_>,
    prng: &mut Prng,
    warnings: &mut Vec<GenerationWarning>,
) -> Result<Vec<Word>, Vec<GenerateError>>
where
    S: AsRef<str>,
{
    let candidates = normalize_all(raw, options.folding, warnings);

    let requested = match options.number_of_words {
        0 => DEFAULT_WORD_CAP,
        n => n,
    };
    let words = if requested < candidates.len() {
        sample(candidates, requested, options, prng, warnings)
    } else {
        candidates
    };

    let too_long: Vec<_> = words
        .iter()
        .filter(|word| word.len() > options.rows && word.len() > options.columns)
        .map(|word| GenerateError::WordTooLong {
            word: word.text().to_owned(),
            rows: options.rows,
            columns: options.columns,
        })
        .collect();
    if !too_long.is_empty() {
        return Err(too_long);
    }
    if words.is_empty() {
        return Err(vec![GenerateError::NoWords]);
    }
    Ok(words)
}

fn normalize_all<S>(
    raw: &[S],
    folding: &LetterFolding,
    warnings: &mut Vec<GenerationWarning>,
) -> Vec<Word>
where
    S: AsRef<str>,
{
    let mut words: Vec<Word> = Vec::with_capacity(raw.len());
    for text in raw {
        let word = Word::new(text.as_ref(), folding);
        let warning = if word.is_empty() {
            GenerationWarning::EmptyWord {
                word: word.text().to_owned(),
            }
        } else if words.iter().any(|w| w.normalized() == word.normalized()) {
            GenerationWarning::DuplicateWord {
                word: word.text().to_owned(),
            }
        } else {
            words.push(word);
            continue;
        };
        log::warn!("{warning}");
        warnings.push(warning);
    }
    words
}

fn sample(
    candidates: Vec<Word>,
    requested: usize,
    options: &PrepareOptions<'_>,
    prng: &mut Prng,
    warnings: &mut Vec<GenerationWarning>,
) -> Vec<Word> {
    let mut picked = vec![false; candidates.len()];
    let mut found = 0;
    for _ in 0..requested {
        for _ in 0..options.limits.sample_tries {
            let i = prng.index(candidates.len());
            if !picked[i] && options.profile.accepts_length(candidates[i].len()) {
                picked[i] = true;
                found += 1;
                break;
            }
        }
    }

    if found < requested {
        let warning = GenerationWarning::NotEnoughWords { requested, found };
        log::warn!("{warning}");
        warnings.push(warning);
    }

    candidates
        .into_iter()
        .zip(picked)
        .filter_map(|(word, picked)| picked.then_some(word))
        .collect()
}
