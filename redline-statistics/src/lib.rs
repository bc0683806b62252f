#![doc(
    html_logo_url = "https://raw.githubusercontent.com/redline-tools/redline/main/assets/redline.svg",
    issue_tracker_base_url = "https://github.com/redline-tools/redline/issues/"
)]

//! Text statistics and readability formulas for redline.
//!
//! Everything here is plain counting and arithmetic over the flattened
//! document text; nothing depends on the document tree or the annotation
//! machinery.

mod readability;
mod syllables;
mod text_statistic;

pub use readability::{
    flesch_reading_ease, flesch_reading_ease_amstad, wiener_sachtextformel, ReadabilityScores,
};
pub use syllables::{count_syllables, count_syllables_all};
pub use text_statistic::TextStatistic;
