// Colored terminal output for the repeated-question report.
//
// All terminal-specific formatting lives here; main.rs just delegates.

use colored::Colorize;

use crate::model::{FrequencyTier, RepeatCluster};
use crate::topics;

/// Display the ranked cluster list in the terminal.
pub fn display_clusters(clusters: &[RepeatCluster]) {
    if clusters.is_empty() {
        println!("No repeated questions found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Repeated Questions ({} found) ===", clusters.len()).bold()
    );
    println!();

    for (i, cluster) in clusters.iter().enumerate() {
        let tier = FrequencyTier::from_count(cluster.frequency);
        let badge = match tier {
            Some(t) => colorize_tier(t),
            // Reported clusters always have frequency >= 2; keep a fallback anyway
            None => "?".dimmed(),
        };

        println!(
            "  {:>3}. {}  appeared in {} papers: {}",
            i + 1,
            badge,
            cluster.frequency,
            cluster.papers.join(", "),
        );
        println!(
            "       Topic: {}",
            topics::detect_topic(&cluster.question).green()
        );
        println!("       {}", super::truncate_chars(&cluster.question, 160));
        println!();
    }

    // Summary
    let high = clusters
        .iter()
        .filter(|c| FrequencyTier::from_count(c.frequency) == Some(FrequencyTier::High))
        .count();
    let medium = clusters
        .iter()
        .filter(|c| FrequencyTier::from_count(c.frequency) == Some(FrequencyTier::Medium))
        .count();

    if high > 0 {
        println!("  {} {} high-frequency questions (3+ papers)", "!!".red().bold(), high);
    }
    if medium > 0 {
        println!("  {} {} medium-frequency questions (2 papers)", "~".yellow(), medium);
    }
}

/// Display the question units segmented from a single paper, marking which
/// ones survive the candidate length filter.
pub fn display_segments(label: &str, units: &[String], min_question_chars: usize) {
    println!(
        "\n{}",
        format!("=== Question units in paper {label} ({} detected) ===", units.len()).bold()
    );
    println!();

    let mut kept = 0;
    for (i, unit) in units.iter().enumerate() {
        let normalized = crate::analysis::normalize::normalize(unit);
        if normalized.chars().count() > min_question_chars {
            kept += 1;
            println!("  {:>3}. {}", i + 1, super::truncate_chars(unit, 140));
        } else {
            println!(
                "  {:>3}. {} {}",
                i + 1,
                super::truncate_chars(unit, 140).dimmed(),
                "(too short, skipped)".dimmed()
            );
        }
    }

    println!();
    println!("  {kept} of {} units are candidate questions", units.len());
}

/// Colorize a frequency tier badge.
fn colorize_tier(tier: FrequencyTier) -> colored::ColoredString {
    match tier {
        FrequencyTier::High => tier.as_str().red().bold(),
        FrequencyTier::Medium => tier.as_str().yellow(),
    }
}
