// Report files: CSV, plain-text, and JSON exports of the cluster list.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::model::RepeatCluster;
use crate::topics;

/// One exported row: a cluster plus its presentation-time topic label.
#[derive(Serialize)]
struct ReportRow<'a> {
    question: &'a str,
    frequency: u32,
    papers: &'a [String],
    topic: &'static str,
}

fn rows(clusters: &[RepeatCluster]) -> Vec<ReportRow<'_>> {
    clusters
        .iter()
        .map(|c| ReportRow {
            question: &c.question,
            frequency: c.frequency,
            papers: &c.papers,
            topic: topics::detect_topic(&c.question),
        })
        .collect()
}

/// Write the cluster list as CSV: Question,Papers,Frequency,Topic.
pub fn write_csv(clusters: &[RepeatCluster], path: &Path) -> Result<()> {
    let mut out = String::from("Question,Papers,Frequency,Topic\n");
    for row in rows(clusters) {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(row.question),
            csv_field(&row.papers.join("; ")),
            row.frequency,
            csv_field(row.topic),
        ));
    }
    fs::write(path, out).with_context(|| format!("Cannot write {}", path.display()))
}

/// Write the cluster list as a plain-text report.
pub fn write_txt(clusters: &[RepeatCluster], path: &Path) -> Result<()> {
    let mut out = format!(
        "Repeated questions report (generated {})\n\n",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    for row in rows(clusters) {
        out.push_str(&format!(
            "[{}] {} | {} | freq={}\n\n",
            row.papers.join(", "),
            row.question,
            row.topic,
            row.frequency,
        ));
    }
    fs::write(path, out).with_context(|| format!("Cannot write {}", path.display()))
}

/// Write the cluster list as pretty-printed JSON.
pub fn write_json(clusters: &[RepeatCluster], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&rows(clusters))?;
    fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
