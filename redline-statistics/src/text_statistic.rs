//! Counting words, sentences and syllables over plain text.
//!
//! Works on the flattened document text. Sentence boundaries are the
//! usual terminators (`.` `!` `?`); word boundaries come from Unicode
//! segmentation. These are the inputs of the readability formulas, which
//! average over whole documents, so the simple boundary rules are fine.

use unicode_segmentation::UnicodeSegmentation;

use crate::syllables::count_syllables;

/// Word, sentence and syllable counts for one text.
#[derive(Debug, Clone)]
pub struct TextStatistic {
    sentences: Vec<String>,
    words: Vec<String>,
    syllables: usize,
}

impl TextStatistic {
    pub fn of(text: &str) -> Self {
        let sentences = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let words: Vec<String> = text.unicode_words().map(str::to_string).collect();
        let syllables = words.iter().map(|w| count_syllables(w)).sum();

        TextStatistic {
            sentences,
            words,
            syllables,
        }
    }

    pub fn number_of_sentences(&self) -> usize {
        self.sentences.len()
    }

    pub fn number_of_words(&self) -> usize {
        self.words.len()
    }

    pub fn number_of_syllables(&self) -> usize {
        self.syllables
    }

    /// Characters across all words, excluding separators and punctuation.
    pub fn number_of_characters(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).sum()
    }

    pub fn average_words_per_sentence(&self) -> f64 {
        ratio(self.number_of_words(), self.number_of_sentences())
    }

    pub fn average_syllables_per_word(&self) -> f64 {
        ratio(self.number_of_syllables(), self.number_of_words())
    }

    pub fn average_characters_per_word(&self) -> f64 {
        ratio(self.number_of_characters(), self.number_of_words())
    }

    /// Fraction (0..=1) of words with at least `n` syllables.
    pub fn fraction_of_words_with_min_syllables(&self, n: usize) -> f64 {
        self.fraction(|word| count_syllables(word) >= n)
    }

    /// Fraction (0..=1) of words with exactly `n` syllables.
    pub fn fraction_of_words_with_syllables(&self, n: usize) -> f64 {
        self.fraction(|word| count_syllables(word) == n)
    }

    /// Fraction (0..=1) of words with at least `n` characters.
    pub fn fraction_of_words_with_min_characters(&self, n: usize) -> f64 {
        self.fraction(|word| word.chars().count() >= n)
    }

    /// The sentence with the most words, if any.
    pub fn longest_sentence(&self) -> Option<&str> {
        self.sentences
            .iter()
            .max_by_key(|s| s.unicode_words().count())
            .map(String::as_str)
    }

    /// The word with the most syllables, if any.
    pub fn longest_word_by_syllables(&self) -> Option<&str> {
        self.words
            .iter()
            .max_by_key(|w| count_syllables(w))
            .map(String::as_str)
    }

    fn fraction(&self, predicate: impl Fn(&str) -> bool) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let matching = self.words.iter().filter(|w| predicate(w.as_str())).count();
        matching as f64 / self.words.len() as f64
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
