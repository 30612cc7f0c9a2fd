// Keyword topic tagging: a fixed lookup table over a cluster's
// representative text. Checked in order, first keyword hit wins.

/// Topic keyword table. Order matters: a question mentioning both
/// "equivalence relation" and "function" is tagged with the earlier topic.
const TOPICS: &[(&str, &[&str])] = &[
    (
        "Equivalence / Relations",
        &["equivalence", "relation", "reflexive", "symmetric", "transitive"],
    ),
    (
        "Graph Theory",
        &["graph", "bfs", "dfs", "spanning", "tree", "euler", "hamilton"],
    ),
    ("Recurrence", &["recurrence", "generating"]),
    (
        "Functions",
        &["function", "injective", "surjective", "bijective"],
    ),
    (
        "Combinatorics",
        &["combination", "permutation", "pigeon", "multinomial"],
    ),
];

/// Label a question with a coarse topic. Returns "General" when nothing in
/// the table matches.
pub fn detect_topic(question: &str) -> &'static str {
    let q = question.to_lowercase();
    for (topic, keywords) in TOPICS {
        if keywords.iter().any(|k| q.contains(k)) {
            return topic;
        }
    }
    "General"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert_eq!(
            detect_topic("Prove that the relation R is REFLEXIVE"),
            "Equivalence / Relations"
        );
    }

    #[test]
    fn first_table_entry_wins() {
        // Mentions both a relation keyword and a graph keyword
        assert_eq!(
            detect_topic("Draw the relation as a graph"),
            "Equivalence / Relations"
        );
    }

    #[test]
    fn unmatched_questions_are_general() {
        assert_eq!(detect_topic("Convert 1011 from binary to decimal"), "General");
    }

    #[test]
    fn graph_keywords() {
        assert_eq!(detect_topic("Find a minimum spanning tree"), "Graph Theory");
    }
}
