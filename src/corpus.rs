// Corpus loading: reads pre-extracted paper text from disk.
//
// Text extraction (PDF to lines) happens outside this crate. The loader
// consumes its output: one UTF-8 text file per paper, lines in page order,
// with no further structure guaranteed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::info;

use crate::model::Paper;

/// Derive a short label from a file name: the first 4-digit year if present.
///
/// The rest of the pipeline treats the label as an opaque key; "Unknown" is
/// only a display fallback for files with no year in their name.
pub fn paper_label(name: &str) -> String {
    let year = Regex::new(r"20\d{2}").unwrap();
    match year.find(name) {
        Some(m) => m.as_str().to_string(),
        None => "Unknown".to_string(),
    }
}

/// Load every `.txt` file in a directory as one paper.
///
/// Files are taken in name order so repeated runs see the papers in the same
/// sequence. Files that derive the same label are merged into a single paper
/// (one document identity per label), lines concatenated in file order.
pub fn load_dir(dir: &Path) -> Result<Vec<Paper>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut papers: Vec<Paper> = Vec::new();

    for path in &files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let label = paper_label(&name);

        match papers.iter_mut().find(|p| p.label == label) {
            Some(existing) => existing.lines.extend(lines),
            None => papers.push(Paper { label, lines }),
        }
    }

    info!(
        files = files.len(),
        papers = papers.len(),
        "Loaded corpus"
    );

    Ok(papers)
}
