// TF-IDF vector-cosine similarity.
//
// fit() makes one pass over every candidate question in the corpus to build
// smoothed inverse-document-frequency weights. Each candidate is one
// document, so words that appear in every paper's boilerplate get
// downweighted while distinctive terms get boosted. score() then builds a
// tf-idf weight map per string and takes the cosine of the pair.
//
// English stop words and single-character tokens carry no signal and are
// excluded from the vocabulary.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

use super::traits::SimilarityScorer;

pub struct TfIdfScorer {
    idf: HashMap<String, f64>,
    /// IDF assigned to terms never seen during fit.
    unseen_idf: f64,
    stop: HashSet<String>,
}

impl TfIdfScorer {
    /// Fit IDF weights over the full candidate set.
    ///
    /// Smoothed formula: idf = ln((1 + n) / (1 + df)) + 1, never zero, so
    /// corpus-wide terms still contribute a little rather than vanishing.
    pub fn fit(candidates: &[String]) -> Self {
        let stop: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        let mut df: HashMap<String, usize> = HashMap::new();
        for text in candidates {
            let unique: HashSet<&str> = tokens(text, &stop).collect();
            for term in unique {
                *df.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let n = candidates.len() as f64;
        let idf = df
            .into_iter()
            .map(|(term, count)| (term, ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0))
            .collect();

        Self {
            idf,
            unseen_idf: (1.0 + n).ln() + 1.0,
            stop,
        }
    }

    /// Sparse tf-idf weight map for one normalized string.
    fn weights(&self, text: &str) -> HashMap<String, f64> {
        let mut tf: HashMap<&str, usize> = HashMap::new();
        for term in tokens(text, &self.stop) {
            *tf.entry(term).or_insert(0) += 1;
        }

        tf.into_iter()
            .map(|(term, count)| {
                let idf = self.idf.get(term).copied().unwrap_or(self.unseen_idf);
                (term.to_string(), count as f64 * idf)
            })
            .collect()
    }
}

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        cosine_from_weights(&self.weights(a), &self.weights(b))
    }
}

fn tokens<'a>(text: &'a str, stop: &'a HashSet<String>) -> impl Iterator<Item = &'a str> {
    text.split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .filter(move |t| !stop.contains(*t))
}

/// Cosine similarity between two sparse weight maps.
///
/// Returns 0.0 when either vector has (near-)zero magnitude; clamped to
/// [0, 1] against floating point drift.
pub fn cosine_from_weights(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();

    let mag_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let mag_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if mag_a < f64::EPSILON || mag_b < f64::EPSILON {
        return 0.0;
    }

    (dot / (mag_a * mag_b)).clamp(0.0, 1.0)
}
