// Question segmentation: splitting a paper's extracted lines into units.
//
// Extracted text has no structure beyond line order: blank lines, broken
// hyphenation, and page headers/footers all show up. The segmenter leans on
// two cheap structural cues: very short lines are noise, and a leading item
// marker ("Q1", "q. 2", "3.", "4)") starts a new question. Everything else is
// a continuation of whatever question is currently being accumulated.

use regex_lite::Regex;

/// Lines matching this start a new question unit.
const MARKER_PATTERN: &str = r"(?i)^(?:q\.?\s*\d+|\d+[.)])";

pub struct Segmenter {
    min_line_chars: usize,
    marker: Regex,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Segmenter {
    pub fn new(min_line_chars: usize) -> Self {
        Self {
            min_line_chars,
            marker: Regex::new(MARKER_PATTERN).unwrap(),
        }
    }

    /// Split a paper's lines into question units, in document order.
    ///
    /// Leading lines before the first marker accumulate into an initial unit
    /// of their own and are emitted even without a number, since some papers'
    /// first question carries no explicit marker.
    pub fn segment(&self, lines: &[String]) -> Vec<String> {
        let mut questions = Vec::new();
        let mut buffer = String::new();

        for line in lines {
            let line = line.trim();
            if line.chars().count() < self.min_line_chars {
                continue;
            }

            if self.marker.is_match(line) {
                if !buffer.is_empty() {
                    questions.push(std::mem::take(&mut buffer));
                }
                buffer.push_str(line);
            } else {
                if !buffer.is_empty() {
                    buffer.push(' ');
                }
                buffer.push_str(line);
            }
        }

        if !buffer.is_empty() {
            questions.push(buffer);
        }

        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn folds_continuation_lines() {
        let segmenter = Segmenter::default();
        let result = segmenter.segment(&lines(&[
            "1. What is X",
            "continuing here",
            "2. What is Y",
        ]));
        assert_eq!(result, vec!["1. What is X continuing here", "2. What is Y"]);
    }

    #[test]
    fn short_lines_are_noise() {
        let segmenter = Segmenter::default();
        let result = segmenter.segment(&lines(&["1. What is a spanning tree", "", "ii)", "2. Define a path"]));
        assert_eq!(result, vec!["1. What is a spanning tree", "2. Define a path"]);
    }

    #[test]
    fn recognizes_marker_variants() {
        let segmenter = Segmenter::default();
        let result = segmenter.segment(&lines(&[
            "Q1 first question text",
            "q. 2 second question text",
            "3) third question text",
            "Q.12 twelfth question text",
        ]));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn unmarked_preamble_becomes_first_unit() {
        let segmenter = Segmenter::default();
        let result = segmenter.segment(&lines(&[
            "Define an equivalence relation with proof",
            "1. What is a lattice",
        ]));
        assert_eq!(result[0], "Define an equivalence relation with proof");
        assert_eq!(result[1], "1. What is a lattice");
    }

    #[test]
    fn bare_number_without_punctuation_is_a_continuation() {
        // "10 marks" style lines do not start a question
        let segmenter = Segmenter::default();
        let result = segmenter.segment(&lines(&["1. Prove the handshake lemma", "10 marks each"]));
        assert_eq!(result, vec!["1. Prove the handshake lemma 10 marks each"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let segmenter = Segmenter::default();
        assert!(segmenter.segment(&[]).is_empty());
        assert!(segmenter.segment(&lines(&["", "  ", "ab"])).is_empty());
    }
}
