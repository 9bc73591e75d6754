//! Runtime configuration for a scrape.
//!
//! Everything the fetcher and the enrichment adapter need is carried in one
//! [`Config`] value that is built once in `main` and handed to constructors.
//!
//! ## API key
//!
//! Settings come from the process environment, then from a `.env` file in
//! the working directory. The Parallel API key is loaded from (in order of
//! priority):
//! 1. `PARALLEL_API_KEY_FILE` → reads the key from the file path
//! 2. `PARALLEL_API_KEY` → uses the value directly
//! 3. Neither set → enrichment is unavailable (not an error)

use crate::error::ConfigError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Course page scraped when no override is given.
pub const DEFAULT_COURSE_URL: &str = "https://cseweb.ucsd.edu/classes/fa25/cse120-a/";

/// Parallel beta API root.
pub const DEFAULT_API_BASE: &str = "https://api.parallel.ai/v1beta";

/// Topic looked up in the schedule by default ("Semaphores and Monitors").
pub const DEFAULT_TOPIC_PATTERN: &str = r"semaphores?\s+(and\s+)?monitors?";

pub const ENV_API_KEY: &str = "PARALLEL_API_KEY";
pub const ENV_API_KEY_FILE: &str = "PARALLEL_API_KEY_FILE";
pub const ENV_API_BASE: &str = "PARALLEL_API_BASE";

/// Local settings file, `NAME=value` per line.
pub const SETTINGS_FILE: &str = ".env";

/// Explicit configuration for one scraper run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Course page fetched by the page fetcher. Also the base for relative links.
    pub course_url: String,
    /// Course code written into the bundle.
    pub course_code: String,
    /// Institution written into the bundle.
    pub institution: String,
    /// Case-insensitive pattern that selects the topic row.
    pub topic_pattern: String,
    /// Parallel API root, without trailing slash.
    pub api_base: String,
    /// Parallel API key. `None` means enrichment is unavailable.
    pub api_key: Option<String>,
    /// Timeout for the course page GET.
    pub page_timeout: Duration,
    /// Timeout for each search call.
    pub search_timeout: Duration,
    /// Timeout for the paper task call.
    pub task_timeout: Duration,
    /// Pause after every search call.
    pub rate_limit_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            course_url: DEFAULT_COURSE_URL.to_string(),
            course_code: "CSE 120".to_string(),
            institution: "UCSD".to_string(),
            topic_pattern: DEFAULT_TOPIC_PATTERN.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            page_timeout: Duration::from_secs(10),
            search_timeout: Duration::from_secs(30),
            task_timeout: Duration::from_secs(70),
            rate_limit_delay: Duration::from_millis(500),
        }
    }
}

impl Config {
    /// Defaults plus the API key and base URL taken from the environment,
    /// falling back to [`SETTINGS_FILE`] for names the environment lacks.
    pub fn from_env() -> Self {
        let settings = read_settings_file(Path::new(SETTINGS_FILE));
        Self::from_lookup(|name| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .or_else(|| settings.get(name).cloned())
        })
    }

    /// Defaults plus the settings resolved through `lookup`.
    ///
    /// Blank values count as unset. A key file that cannot be read is logged
    /// and treated as "no key".
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        match load_api_key(&get) {
            Ok(key) => config.api_key = key,
            Err(e) => tracing::warn!("{e}; enrichment disabled"),
        }

        if let Some(base) = get(ENV_API_BASE) {
            config.api_base = base;
        }
        config.api_base = config.api_base.trim_end_matches('/').to_string();

        config
    }

    /// Compile the topic pattern case-insensitively.
    pub fn topic_regex(&self) -> Result<Regex, ConfigError> {
        RegexBuilder::new(&self.topic_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ConfigError::TopicPattern {
                pattern: self.topic_pattern.clone(),
                source,
            })
    }
}

/// Resolve the API key: a key file beats a literal key.
fn load_api_key(get: &impl Fn(&str) -> Option<String>) -> Result<Option<String>, ConfigError> {
    if let Some(path) = get(ENV_API_KEY_FILE) {
        return read_key_file(Path::new(&path));
    }
    Ok(get(ENV_API_KEY))
}

/// Read a key file; whitespace-only files count as no key.
pub fn read_key_file(path: &Path) -> Result<Option<String>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    let key = raw.trim();
    Ok((!key.is_empty()).then(|| key.to_string()))
}

/// Read `NAME=value` pairs from a dotenv-style settings file.
///
/// A missing file yields no settings. Reading stops at the first malformed
/// line and keeps the pairs before it.
pub fn read_settings_file(path: &Path) -> HashMap<String, String> {
    let lines = match dotenvy::from_path_iter(path) {
        Ok(lines) => lines,
        Err(e) if e.not_found() => return HashMap::new(),
        Err(e) => {
            tracing::warn!("cannot read {}: {e}", path.display());
            return HashMap::new();
        }
    };

    let mut settings = HashMap::new();
    for item in lines {
        match item {
            Ok((name, value)) => {
                settings.insert(name, value);
            }
            Err(e) => {
                tracing::warn!("malformed {}: {e}", path.display());
                break;
            }
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_course() {
        let config = Config::default();
        assert_eq!(config.course_code, "CSE 120");
        assert_eq!(config.institution, "UCSD");
        assert_eq!(config.page_timeout, Duration::from_secs(10));
        assert_eq!(config.search_timeout, Duration::from_secs(30));
        assert_eq!(config.task_timeout, Duration::from_secs(70));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_topic_regex_is_case_insensitive() {
        let re = Config::default().topic_regex().unwrap();
        assert!(re.is_match("SEMAPHORES AND MONITORS"));
        assert!(re.is_match("Semaphore monitor"));
        assert!(!re.is_match("Process Scheduling"));
    }

    #[test]
    fn test_bad_topic_pattern_is_reported() {
        let config = Config {
            topic_pattern: "(unclosed".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.topic_regex(),
            Err(ConfigError::TopicPattern { .. })
        ));
    }

    #[test]
    fn test_read_key_file_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  sk-test-123  ").unwrap();
        let key = read_key_file(file.path()).unwrap();
        assert_eq!(key.as_deref(), Some("sk-test-123"));
    }

    #[test]
    fn test_blank_key_file_is_no_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        assert_eq!(read_key_file(file.path()).unwrap(), None);
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_nothing_set_means_no_key() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_key_from_variable_is_trimmed() {
        let config = Config::from_lookup(lookup_from(&[(ENV_API_KEY, "  sk-env  ")]));
        assert_eq!(config.api_key.as_deref(), Some("sk-env"));
    }

    #[test]
    fn test_key_file_beats_variable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sk-file").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY_FILE, path.as_str()),
            (ENV_API_KEY, "sk-env"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("sk-file"));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY_FILE, "   "),
            (ENV_API_KEY, "sk-env"),
            (ENV_API_BASE, ""),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);

        let config = Config::from_lookup(lookup_from(&[(ENV_API_KEY, " \t ")]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_unreadable_key_file_means_no_key() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY_FILE, "/nonexistent/coursepack/key"),
            (ENV_API_KEY, "sk-env"),
        ]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_api_base_override_trims_slashes() {
        let config = Config::from_lookup(lookup_from(&[(
            ENV_API_BASE,
            "http://localhost:8080/v1beta//",
        )]));
        assert_eq!(config.api_base, "http://localhost:8080/v1beta");
    }

    #[test]
    fn test_settings_file_supplies_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# Parallel credentials\nPARALLEL_API_KEY=sk-dotenv\nOTHER=\"quoted value\"\n",
        )
        .unwrap();

        let settings = read_settings_file(&path);
        assert_eq!(settings.get("OTHER").map(String::as_str), Some("quoted value"));

        let config = Config::from_lookup(|name| settings.get(name).cloned());
        assert_eq!(config.api_key.as_deref(), Some("sk-dotenv"));
    }

    #[test]
    fn test_missing_settings_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(read_settings_file(&dir.path().join(".env")).is_empty());
    }

    #[test]
    fn test_missing_key_file_errors() {
        let err = read_key_file(Path::new("/nonexistent/coursepack/key")).unwrap_err();
        assert!(matches!(err, ConfigError::KeyFile { .. }));
    }
}
