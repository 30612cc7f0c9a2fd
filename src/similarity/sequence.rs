// Character-sequence overlap similarity (Ratcliff/Obershelp).
//
// Recursively finds the longest common contiguous block of the two strings,
// then matches the stretches to its left and right the same way. The score is
//
//   2 * matched_chars / (len_a + len_b)
//
// which is 1.0 for identical strings and near 0 for unrelated ones. Matching
// only contiguous blocks keeps unrelated English sentences (which share
// plenty of scattered letters) from scoring high.

use super::traits::SimilarityScorer;

pub struct SequenceScorer;

impl SimilarityScorer for SequenceScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            // Two empty strings are identical.
            return 1.0;
        }
        2.0 * matched_chars(&a, &b) as f64 / total as f64
    }
}

/// Total characters covered by recursively matching the longest common block
/// and then the unmatched stretches on either side of it.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (len, a_start, b_start) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matched_chars(&a[..a_start], &b[..b_start])
        + matched_chars(&a[a_start + len..], &b[b_start + len..])
}

/// (length, start in a, start in b) of the longest common contiguous block.
/// Ties go to the earliest position in a, then in b.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                row[j + 1] = run;
                if run > best.0 {
                    best = (run, i + 1 - run, j + 1 - run);
                }
            }
        }
        prev = row;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        let scorer = SequenceScorer;
        assert_eq!(scorer.score("define a graph", "define a graph"), 1.0);
    }

    #[test]
    fn both_empty_score_one() {
        let scorer = SequenceScorer;
        assert_eq!(scorer.score("", ""), 1.0);
    }

    #[test]
    fn one_empty_scores_zero() {
        let scorer = SequenceScorer;
        assert_eq!(scorer.score("", "define a graph"), 0.0);
        assert_eq!(scorer.score("define a graph", ""), 0.0);
    }

    #[test]
    fn no_common_characters_scores_zero() {
        let scorer = SequenceScorer;
        assert_eq!(scorer.score("abc", "xyz"), 0.0);
    }

    #[test]
    fn partial_overlap_exact_value() {
        // Matched block "bc" (2 chars) of lengths 4 and 2: 2*2/6
        let scorer = SequenceScorer;
        let score = scorer.score("abcd", "bc");
        assert!((score - 2.0 / 3.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn symmetric() {
        let scorer = SequenceScorer;
        let a = "state and prove eulers formula";
        let b = "prove eulers theorem for planar graphs";
        assert!((scorer.score(a, b) - scorer.score(b, a)).abs() < 1e-12);
    }

    #[test]
    fn longest_block_prefers_earliest_tie() {
        let (len, a_start, b_start) = longest_common_block(
            &"abxab".chars().collect::<Vec<_>>(),
            &"ab".chars().collect::<Vec<_>>(),
        );
        assert_eq!((len, a_start, b_start), (2, 0, 0));
    }
}
