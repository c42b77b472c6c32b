use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults reproduce the fixed-path layout.
#[derive(Debug, Clone)]
pub struct Config {
    pub job_description_path: PathBuf,
    pub resume_path: PathBuf,
    pub report_path: PathBuf,
    pub port: u16,
    /// When false the report is embedded into the HTML page verbatim.
    pub escape_report_html: bool,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            job_description_path: PathBuf::from("Job Description.docx"),
            resume_path: PathBuf::from("Harsh QA_Resume.docx"),
            report_path: PathBuf::from("ats_score.txt"),
            port: 8080,
            escape_report_html: true,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            job_description_path: lookup("JOB_DESCRIPTION_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.job_description_path),
            resume_path: lookup("RESUME_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_path),
            report_path: lookup("REPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_path),
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            escape_report_html: match lookup("ESCAPE_REPORT_HTML") {
                Some(raw) => parse_flag(&raw).context("ESCAPE_REPORT_HTML must be a boolean")?,
                None => defaults.escape_report_html,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(
            config.job_description_path,
            PathBuf::from("Job Description.docx")
        );
        assert_eq!(config.resume_path, PathBuf::from("Harsh QA_Resume.docx"));
        assert_eq!(config.report_path, PathBuf::from("ats_score.txt"));
        assert_eq!(config.port, 8080);
        assert!(config.escape_report_html);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("JOB_DESCRIPTION_PATH", "/tmp/jd.docx"),
            ("RESUME_PATH", "/tmp/cv.docx"),
            ("REPORT_PATH", "/tmp/out.txt"),
            ("PORT", "9090"),
            ("ESCAPE_REPORT_HTML", "no"),
        ]))
        .unwrap();
        assert_eq!(config.job_description_path, PathBuf::from("/tmp/jd.docx"));
        assert_eq!(config.resume_path, PathBuf::from("/tmp/cv.docx"));
        assert_eq!(config.report_path, PathBuf::from("/tmp/out.txt"));
        assert_eq!(config.port, 9090);
        assert!(!config.escape_report_html);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_escape_flag_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("ESCAPE_REPORT_HTML", "maybe")])).is_err());
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(!parse_flag("False").unwrap());
        assert!(!parse_flag("0").unwrap());
    }
}
