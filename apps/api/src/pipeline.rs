//! Startup pipeline: load both documents → normalize → score → write the report.
//!
//! Runs once, to completion, before the server binds its listener.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::document::loader::extract_docx_text;
use crate::report::{write_report, AtsReport};
use crate::scoring::normalizer::normalize;
use crate::scoring::scorer::MatchScorer;

/// Scores the configured résumé against the configured job description and
/// persists the rendered report to `config.report_path`.
pub fn run_pipeline(config: &Config, scorer: &dyn MatchScorer) -> Result<AtsReport> {
    let job_text = extract_docx_text(&config.job_description_path)
        .context("Error reading job description")?;
    let resume_text = extract_docx_text(&config.resume_path).context("Error reading resume")?;

    let job_tokens = normalize(&job_text);
    let resume_tokens = normalize(&resume_text);

    let outcome = scorer.score(&resume_tokens, &job_tokens);
    info!(
        matched = outcome.matched_tokens,
        job_tokens = outcome.job_token_count,
        backend = %outcome.scorer_backend,
        "ATS Score: {:.2}%",
        outcome.score
    );

    let report = AtsReport {
        job_description_path: config.job_description_path.clone(),
        resume_path: config.resume_path.clone(),
        score: outcome.score,
    };
    write_report(&config.report_path, &report.render()).context("Error saving result")?;
    info!("ATS score saved to {}", config.report_path.display());

    Ok(report)
}
