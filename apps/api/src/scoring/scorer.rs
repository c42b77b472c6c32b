//! Match scoring — pluggable, trait-based scorer comparing résumé tokens to job tokens.
//!
//! Default: `TokenOverlapScorer` (bag-of-words overlap, deterministic).
//!
//! The startup pipeline takes a `&dyn MatchScorer`, so a different backend can be
//! swapped in without touching the loader, report writer or server.

use std::collections::HashSet;

/// Result of scoring one résumé against one job description.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub score: f64,            // 0.0 – 100.0
    pub matched_tokens: usize, // résumé tokens found in the job set, repeats included
    pub job_token_count: usize,
    pub scorer_backend: String, // "token_overlap"
}

/// The match scorer trait. Implement this to swap scoring backends.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume_tokens: &[String], job_tokens: &[String]) -> MatchOutcome;
}

/// Naive lexical overlap scorer. No weighting, no stemming, order-insensitive.
///
/// Every résumé token present in the job set counts once per occurrence; the
/// total is divided by the number of job tokens (duplicates included).
/// Scores 0.0 for an empty job description and never exceeds 100.0.
pub struct TokenOverlapScorer;

impl MatchScorer for TokenOverlapScorer {
    fn score(&self, resume_tokens: &[String], job_tokens: &[String]) -> MatchOutcome {
        let matched_tokens = count_matches(resume_tokens, job_tokens);
        MatchOutcome {
            score: overlap_percentage(matched_tokens, job_tokens.len()),
            matched_tokens,
            job_token_count: job_tokens.len(),
            scorer_backend: "token_overlap".to_string(),
        }
    }
}

fn count_matches(resume_tokens: &[String], job_tokens: &[String]) -> usize {
    let job_set: HashSet<&str> = job_tokens.iter().map(String::as_str).collect();
    resume_tokens
        .iter()
        .filter(|token| job_set.contains(token.as_str()))
        .count()
}

fn overlap_percentage(matches: usize, job_token_count: usize) -> f64 {
    if job_token_count == 0 {
        return 0.0;
    }
    // Repeated résumé tokens can push the raw ratio past 100.
    (matches as f64 / job_token_count as f64 * 100.0).min(100.0)
}
