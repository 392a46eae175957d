// Random report construction from the fixed word banks

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{Report, DESCRIPTION_WORDS, LOCATIONS, TITLE_ADJECTIVES, TITLE_NOUNS};
use crate::error::AppError;

const MIN_DESCRIPTION_WORDS: usize = 8;
const MAX_DESCRIPTION_WORDS: usize = 14;

/// Produces reports from a single RNG stream. Two generators built from the
/// same seed and lists yield identical sequences.
pub struct ReportGenerator {
    rng: StdRng,
    categories: Vec<i64>,
    severities: Vec<String>,
    public_rate: f64,
    anon_rate: f64,
}

impl ReportGenerator {
    pub fn new(
        seed: Option<u64>,
        categories: Vec<i64>,
        severities: Vec<String>,
        public_rate: f64,
        anon_rate: f64,
    ) -> Result<Self, AppError> {
        if categories.is_empty() {
            return Err(AppError::Usage("At least one category value is required.".to_string()));
        }
        if severities.is_empty() {
            return Err(AppError::Usage("At least one severity is required.".to_string()));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            rng,
            categories,
            severities,
            public_rate,
            anon_rate,
        })
    }

    /// Draw the next report
    pub fn next_report(&mut self) -> Report {
        let title = self.random_title();
        let description = self.random_sentence(DESCRIPTION_WORDS);
        let location = pick(&mut self.rng, LOCATIONS).to_string();
        let severity = pick(&mut self.rng, &self.severities).clone();
        let report_categories_id = *pick(&mut self.rng, &self.categories);
        let is_public = self.rng.gen::<f64>() < self.public_rate;
        let is_anon = self.rng.gen::<f64>() < self.anon_rate;

        Report {
            title,
            description,
            location,
            severity,
            report_categories_id,
            is_public,
            is_anon,
        }
    }

    fn random_title(&mut self) -> String {
        let adjective = pick(&mut self.rng, TITLE_ADJECTIVES);
        let noun = pick(&mut self.rng, TITLE_NOUNS);
        format!("{} {}", capitalize(adjective), noun)
    }

    fn random_sentence(&mut self, word_bank: &[&str]) -> String {
        let length = self
            .rng
            .gen_range(MIN_DESCRIPTION_WORDS..=MAX_DESCRIPTION_WORDS);
        let words: Vec<&str> = (0..length)
            .map(|_| *pick(&mut self.rng, word_bank))
            .collect();
        format!("{}.", capitalize(&words.join(" ")))
    }
}

// Callers guarantee a non-empty slice
fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
