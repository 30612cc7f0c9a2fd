// Repeated-question detection pipeline.
//
// Greedy one-pass clustering: earlier papers seed clusters, and each later
// paper can contribute at most one matching question per cluster, so a
// cluster's frequency is exactly its distinct-paper count. Similarity is not
// transitive, so no transitive closure is attempted. The first question in a
// later paper that clears the threshold wins, a documented limitation.
//
// Papers are processed in the order given (first-encountered order). Labels
// are opaque strings, so no numeric sort is assumed; callers that want
// reproducible runs sort their input, which the corpus loader does.

use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, info};

use crate::analysis::normalize::normalize;
use crate::analysis::segment::Segmenter;
use crate::config::Config;
use crate::model::{Paper, PaperQuestions, Question, RepeatCluster};
use crate::similarity::{build_scorer, SimilarityScorer};

/// Run the full analysis: segment, filter, score, cluster.
///
/// An empty or single-paper corpus is not an error; there is simply nothing
/// to repeat, and the result is empty.
pub fn run(papers: &[Paper], config: &Config) -> Result<Vec<RepeatCluster>> {
    config.validate()?;

    let candidates = collect_candidates(papers, config);
    let total: usize = candidates.iter().map(|p| p.questions.len()).sum();
    info!(
        papers = papers.len(),
        candidates = total,
        strategy = config.strategy.as_str(),
        "Collected candidate questions"
    );

    // Fewer than two candidates can never produce a repeat, and the
    // vector-cosine strategy would have no vocabulary to fit on.
    if total < 2 {
        return Ok(Vec::new());
    }

    let normalized: Vec<String> = candidates
        .iter()
        .flat_map(|p| p.questions.iter().map(|q| q.normalized.clone()))
        .collect();
    let scorer = build_scorer(config.strategy, &normalized);

    let clusters = find_repeats(
        &candidates,
        scorer.as_ref(),
        config.effective_threshold(),
        config.min_papers,
    );
    info!(clusters = clusters.len(), "Clustering complete");

    Ok(clusters)
}

/// Segment each paper and keep the units long enough to be real questions.
///
/// Headers and instructions normalize short; real questions don't.
pub fn collect_candidates(papers: &[Paper], config: &Config) -> Vec<PaperQuestions> {
    let segmenter = Segmenter::new(config.min_line_chars);

    papers
        .iter()
        .map(|paper| {
            let questions: Vec<Question> = segmenter
                .segment(&paper.lines)
                .into_iter()
                .filter_map(|raw| {
                    let normalized = normalize(&raw);
                    if normalized.chars().count() <= config.min_question_chars {
                        return None;
                    }
                    Some(Question {
                        raw,
                        normalized,
                        paper: paper.label.clone(),
                    })
                })
                .collect();

            debug!(
                paper = paper.label,
                questions = questions.len(),
                "Segmented paper"
            );

            PaperQuestions {
                label: paper.label.clone(),
                questions,
            }
        })
        .collect()
}

/// Greedy clustering pass over per-paper candidate lists.
///
/// The used set keys on (paper index, normalized text), so a question unit
/// participates in at most one cluster, and a duplicate unit within one paper
/// cannot seed a second copy of the same cluster. Claims are only committed
/// when a cluster is actually emitted, so a group that falls short of
/// `min_papers` leaves its questions available to later seeds.
pub fn find_repeats(
    papers: &[PaperQuestions],
    scorer: &dyn SimilarityScorer,
    threshold: f64,
    min_papers: usize,
) -> Vec<RepeatCluster> {
    let mut used: HashSet<(usize, &str)> = HashSet::new();
    let mut clusters = Vec::new();

    for (i, seed_paper) in papers.iter().enumerate() {
        for seed in &seed_paper.questions {
            if used.contains(&(i, seed.normalized.as_str())) {
                continue;
            }

            let mut appeared = vec![seed_paper.label.clone()];
            let mut claimed: Vec<(usize, &str)> = Vec::new();

            for (j, later) in papers.iter().enumerate().skip(i + 1) {
                // At most one match claimed per later paper: first hit wins.
                for question in &later.questions {
                    if used.contains(&(j, question.normalized.as_str())) {
                        continue;
                    }
                    if scorer.score(&seed.normalized, &question.normalized) >= threshold {
                        claimed.push((j, question.normalized.as_str()));
                        appeared.push(later.label.clone());
                        break;
                    }
                }
            }

            if appeared.len() >= min_papers {
                used.insert((i, seed.normalized.as_str()));
                used.extend(claimed);
                clusters.push(RepeatCluster {
                    question: seed.raw.clone(),
                    frequency: appeared.len() as u32,
                    papers: appeared,
                });
            }
        }
    }

    clusters
}
