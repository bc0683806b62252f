//! Readability formulas.
//!
//! Plain arithmetic over a [`TextStatistic`]. The Flesch Reading Ease
//! variants score 0..=100 where higher is easier; the Wiener
//! Sachtextformel approximates a school grade where higher is harder.

use serde::{Deserialize, Serialize};

use crate::text_statistic::TextStatistic;

/// Flesch Reading Ease (original English calibration).
pub fn flesch_reading_ease(stat: &TextStatistic) -> f64 {
    206.835
        - (1.015 * stat.average_words_per_sentence())
        - (84.6 * stat.average_syllables_per_word())
}

/// Flesch Reading Ease in Amstad's adaptation for German.
pub fn flesch_reading_ease_amstad(stat: &TextStatistic) -> f64 {
    let asl = stat.average_words_per_sentence();
    let asw = stat.average_syllables_per_word();

    180.0 - asl - (58.5 * asw)
}

/// First Wiener Sachtextformel.
pub fn wiener_sachtextformel(stat: &TextStatistic) -> f64 {
    let ms = stat.fraction_of_words_with_min_syllables(3) * 100.0;
    let sl = stat.average_words_per_sentence();
    let iw = stat.fraction_of_words_with_min_characters(6) * 100.0;
    let es = stat.fraction_of_words_with_syllables(1) * 100.0;

    0.1935 * ms + 0.1672 * sl + 0.1297 * iw - 0.0327 * es - 0.875
}

/// All formula results for one text, as handed to the quality gate and
/// the report renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub flesch_reading_ease_amstad: f64,
    pub wiener_sachtextformel: f64,
}

impl ReadabilityScores {
    pub fn of(stat: &TextStatistic) -> Self {
        ReadabilityScores {
            flesch_reading_ease: flesch_reading_ease(stat),
            flesch_reading_ease_amstad: flesch_reading_ease_amstad(stat),
            wiener_sachtextformel: wiener_sachtextformel(stat),
        }
    }
}
