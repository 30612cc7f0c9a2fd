use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;

use reprise::analysis::segment::Segmenter;
use reprise::config::{Config, SimilarityStrategy};
use reprise::{corpus, output, pipeline};

/// Reprise: repeated-question detection for exam paper archives.
///
/// Point it at a directory of extracted paper text and it reports which
/// questions recur across papers, how often, and where.
#[derive(Parser)]
#[command(name = "reprise", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a directory of papers and report repeated questions
    Analyze {
        /// Directory containing one extracted .txt file per paper
        dir: PathBuf,

        /// Similarity strategy: sequence | cosine
        #[arg(long)]
        strategy: Option<SimilarityStrategy>,

        /// Match threshold override, in (0, 1]
        #[arg(long)]
        threshold: Option<f64>,

        /// Write a CSV report to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write a plain-text report to this path
        #[arg(long)]
        txt: Option<PathBuf>,

        /// Write a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show the question units detected in a single paper file
    Segment {
        /// Extracted .txt file for one paper
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reprise=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            dir,
            strategy,
            threshold,
            csv,
            txt,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            if let Some(threshold) = threshold {
                config.threshold = Some(threshold);
            }
            config.validate()?;

            let papers = corpus::load_dir(&dir)?;
            if papers.len() < 2 {
                anyhow::bail!(
                    "Need at least 2 papers to compare, found {} in {}.\n\
                     Each paper should be one extracted .txt file.",
                    papers.len(),
                    dir.display()
                );
            }

            for paper in &papers {
                println!("Reading: {} ({} lines)", paper.label, paper.lines.len());
            }

            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!(
                "Analyzing {} papers ({} strategy, threshold {:.2})...",
                papers.len(),
                config.strategy.as_str(),
                config.effective_threshold(),
            ));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let clusters = pipeline::repeats::run(&papers, &config)?;
            spinner.finish_and_clear();

            output::terminal::display_clusters(&clusters);

            if let Some(path) = csv {
                output::export::write_csv(&clusters, &path)?;
                println!("{}", format!("CSV report saved to: {}", path.display()).bold());
            }
            if let Some(path) = txt {
                output::export::write_txt(&clusters, &path)?;
                println!("{}", format!("Text report saved to: {}", path.display()).bold());
            }
            if let Some(path) = json {
                output::export::write_json(&clusters, &path)?;
                println!("{}", format!("JSON report saved to: {}", path.display()).bold());
            }
        }

        Commands::Segment { file } => {
            let config = Config::load()?;

            let text = std::fs::read_to_string(&file)?;
            let lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();

            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let label = corpus::paper_label(&name);

            let units = Segmenter::new(config.min_line_chars).segment(&lines);
            output::terminal::display_segments(&label, &units, config.min_question_chars);
        }
    }

    Ok(())
}
