use std::env;
use std::str::FromStr;

use anyhow::Result;

/// Which similarity strategy to use when comparing questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityStrategy {
    /// Character-sequence overlap ratio (default), no corpus pass needed
    SequenceOverlap,
    /// TF-IDF vector cosine, fitted over the whole candidate set
    VectorCosine,
}

impl SimilarityStrategy {
    /// The threshold observed to work well for this strategy. Used when
    /// neither REPRISE_THRESHOLD nor --threshold is given.
    pub fn default_threshold(&self) -> f64 {
        match self {
            SimilarityStrategy::SequenceOverlap => 0.60,
            SimilarityStrategy::VectorCosine => 0.68,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityStrategy::SequenceOverlap => "sequence",
            SimilarityStrategy::VectorCosine => "cosine",
        }
    }
}

impl FromStr for SimilarityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequence" | "sequence-overlap" => Ok(SimilarityStrategy::SequenceOverlap),
            "cosine" | "tfidf" | "vector-cosine" => Ok(SimilarityStrategy::VectorCosine),
            other => Err(format!(
                "unknown similarity strategy '{other}' (expected 'sequence' or 'cosine')"
            )),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// may override individual fields; call validate() again afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub strategy: SimilarityStrategy,
    /// Explicit match threshold. None means "use the strategy default".
    pub threshold: Option<f64>,
    /// Raw lines shorter than this are discarded as noise before segmentation.
    pub min_line_chars: usize,
    /// A segmented unit is only a candidate if its normalized text is longer
    /// than this. Filters page headers and instructions.
    pub min_question_chars: usize,
    /// Minimum number of distinct papers for a cluster to be reported.
    pub min_papers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: SimilarityStrategy::SequenceOverlap,
            threshold: None,
            min_line_chars: 5,
            min_question_chars: 20,
            min_papers: 2,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults above, and validate it.
    pub fn load() -> Result<Self> {
        let strategy = match env::var("REPRISE_STRATEGY") {
            Ok(value) => value
                .parse::<SimilarityStrategy>()
                .map_err(|e| anyhow::anyhow!("REPRISE_STRATEGY: {e}"))?,
            Err(_) => SimilarityStrategy::SequenceOverlap,
        };

        let config = Self {
            strategy,
            threshold: parse_env("REPRISE_THRESHOLD")?,
            min_line_chars: parse_env("REPRISE_MIN_LINE_CHARS")?.unwrap_or(5),
            min_question_chars: parse_env("REPRISE_MIN_QUESTION_CHARS")?.unwrap_or(20),
            min_papers: parse_env("REPRISE_MIN_PAPERS")?.unwrap_or(2),
        };

        config.validate()?;
        Ok(config)
    }

    /// The threshold actually used for matching: the explicit value if one
    /// was configured, otherwise the strategy default.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold
            .unwrap_or_else(|| self.strategy.default_threshold())
    }

    /// Fail fast on configuration misuse rather than degrade silently.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.effective_threshold();
        if threshold <= 0.0 || threshold > 1.0 {
            anyhow::bail!(
                "Similarity threshold must be in (0, 1], got {threshold}.\n\
                 A threshold of 0 would match every pair of questions."
            );
        }
        if self.min_papers < 2 {
            anyhow::bail!(
                "REPRISE_MIN_PAPERS must be at least 2, got {}. A question\n\
                 appearing in a single paper is not a repeat.",
                self.min_papers
            );
        }
        Ok(())
    }
}

/// Read and parse an optional env var, turning parse failures into errors
/// instead of silently falling back to the default.
fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => anyhow::bail!("{key}={value} is not valid: {e}"),
        },
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_per_strategy() {
        let mut config = Config::default();
        assert!((config.effective_threshold() - 0.60).abs() < 1e-9);
        config.strategy = SimilarityStrategy::VectorCosine;
        assert!((config.effective_threshold() - 0.68).abs() < 1e-9);
    }

    #[test]
    fn explicit_threshold_wins() {
        let config = Config {
            threshold: Some(0.75),
            ..Config::default()
        };
        assert!((config.effective_threshold() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn zero_threshold_rejected() {
        let config = Config {
            threshold: Some(0.0),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        for bad in [-0.1, 1.5] {
            let config = Config {
                threshold: Some(bad),
                ..Config::default()
            };
            assert!(config.validate().is_err(), "threshold {bad} should fail");
        }
    }

    #[test]
    fn threshold_of_one_is_allowed() {
        let config = Config {
            threshold: Some(1.0),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn min_papers_below_two_rejected() {
        let config = Config {
            min_papers: 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn strategy_parses_aliases() {
        assert_eq!(
            "tfidf".parse::<SimilarityStrategy>().unwrap(),
            SimilarityStrategy::VectorCosine
        );
        assert_eq!(
            "SEQUENCE".parse::<SimilarityStrategy>().unwrap(),
            SimilarityStrategy::SequenceOverlap
        );
        assert!("embeddings".parse::<SimilarityStrategy>().is_err());
    }
}
