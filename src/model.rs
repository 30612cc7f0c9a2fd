// Data models: the types that flow through the analysis pipeline.
//
// These are separate from loading and presentation so the engine modules can
// use them without depending on the filesystem or the terminal.

use serde::{Deserialize, Serialize};

/// One source paper: a short label (commonly a year) plus the extracted text
/// lines in page order. Immutable once loaded; the engine only reads it.
#[derive(Debug, Clone)]
pub struct Paper {
    pub label: String,
    pub lines: Vec<String>,
}

/// A candidate question segmented out of one paper.
///
/// The normalized form is computed once at candidate collection and used only
/// as the comparison key; the raw text is always what gets reported.
#[derive(Debug, Clone)]
pub struct Question {
    pub raw: String,
    pub normalized: String,
    /// Label of the paper this question came from.
    pub paper: String,
}

/// All candidate questions from one paper, in document order.
#[derive(Debug, Clone)]
pub struct PaperQuestions {
    pub label: String,
    pub questions: Vec<Question>,
}

/// A group of matching questions found across distinct papers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatCluster {
    /// Representative text: the first-seen raw question.
    pub question: String,
    /// Count of distinct papers the question appeared in.
    pub frequency: u32,
    /// Paper labels in discovery order. Distinct by construction.
    pub papers: Vec<String>,
}

/// How often a cluster recurs, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyTier {
    Medium,
    High,
}

impl FrequencyTier {
    /// Determine the tier from a distinct-paper count. Below two papers the
    /// cluster is not reportable at all, hence the Option.
    pub fn from_count(frequency: u32) -> Option<Self> {
        match frequency {
            0 | 1 => None,
            2 => Some(FrequencyTier::Medium),
            _ => Some(FrequencyTier::High),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyTier::Medium => "MEDIUM",
            FrequencyTier::High => "HIGH",
        }
    }
}

impl std::fmt::Display for FrequencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
