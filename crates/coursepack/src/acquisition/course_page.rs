//! Course page scraper: fetch → locate → extract → categorize.
//!
//! Any failure along the way is logged and replaced with
//! [`fallback_week`](super::fallback::fallback_week), so `scrape_week`
//! always returns usable week data.

use super::categorizer::categorize_all;
use super::fallback::fallback_week;
use super::http_client::HttpClient;
use super::schedule::{extract_topic_row, locate_schedule_table};
use super::types::WeekData;
use crate::config::Config;
use crate::error::ScrapeError;
use regex::Regex;
use scraper::Html;
use tracing::{info, warn};

/// Scrapes one course page.
pub struct CoursePageScraper {
    http: HttpClient,
    config: Config,
    topic: Regex,
}

impl CoursePageScraper {
    pub fn new(http: HttpClient, config: Config, topic: Regex) -> Self {
        Self {
            http,
            config,
            topic,
        }
    }

    /// Scrape the topic row for `week`, substituting fallback data on failure.
    pub async fn scrape_week(&self, week: u32) -> WeekData {
        info!("scraping {} course page...", self.config.course_code);

        let html = match self.fetch_page().await {
            Ok(html) => html,
            Err(e) => {
                warn!("{e}; using fallback data");
                return fallback_week(week);
            }
        };

        match self.parse_week(&html, week) {
            Ok(data) => data,
            Err(e) => {
                warn!("{e}; using fallback data");
                fallback_week(week)
            }
        }
    }

    async fn fetch_page(&self) -> Result<String, ScrapeError> {
        let resp = self
            .http
            .get(&self.config.course_url, self.config.page_timeout)
            .await
            .map_err(|e| ScrapeError::Fetch(format!("{e:#}")))?;

        if resp.is_error_status() {
            return Err(ScrapeError::Status(resp.status));
        }
        Ok(resp.body)
    }

    /// Locate, extract and categorize from already-fetched markup.
    pub fn parse_week(&self, html: &str, week: u32) -> Result<WeekData, ScrapeError> {
        let document = Html::parse_document(html);
        let table = locate_schedule_table(&document).ok_or(ScrapeError::NoScheduleTable)?;
        let row = extract_topic_row(table, &self.topic, &self.config.course_url)
            .ok_or_else(|| ScrapeError::NoTopicRow(self.topic.as_str().to_string()))?;

        let resources = categorize_all(row.links);
        info!(
            textbook = resources.textbook.len(),
            slides = resources.slides.len(),
            homework = resources.homework.len(),
            papers = resources.papers.len(),
            "extraction summary"
        );

        Ok(WeekData {
            week,
            topic: row.topic,
            resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper() -> CoursePageScraper {
        let config = Config::default();
        let topic = config.topic_regex().unwrap();
        CoursePageScraper::new(HttpClient::new(), config, topic)
    }

    #[test]
    fn test_parse_week_categorizes_row_links() {
        let html = r#"
        <table>
          <tr><th>Date</th><th>Lecture</th><th>Materials</th></tr>
          <tr><td>10/9</td><td>Semaphores and Monitors</td>
              <td><a href="ch31.html">Ch. 31</a>
                  <a href="sema.pdf">Semaphores</a>
                  <a href="pr1.html">PR 1</a>
                  <a href="https://dl.acm.org/doi/10.1145/358818.358824">Monitors (Hoare)</a></td></tr>
        </table>"#;

        let week = scraper().parse_week(html, 3).unwrap();
        assert_eq!(week.week, 3);
        assert_eq!(week.topic, "Semaphores and Monitors");
        assert_eq!(week.resources.textbook.len(), 1);
        assert_eq!(week.resources.slides.len(), 1);
        assert_eq!(week.resources.homework.len(), 1);
        assert_eq!(week.resources.papers.len(), 1);
        assert_eq!(
            week.resources.slides[0].url,
            "https://cseweb.ucsd.edu/classes/fa25/cse120-a/sema.pdf"
        );
    }

    #[test]
    fn test_parse_week_without_table() {
        let err = scraper().parse_week("<p>closed</p>", 3).unwrap_err();
        assert!(matches!(err, ScrapeError::NoScheduleTable));
    }

    #[test]
    fn test_parse_week_without_topic() {
        let html = r#"<table><tr><th>Date</th><th>Lecture</th></tr>
                      <tr><td>9/25</td><td>Intro</td></tr></table>"#;
        let err = scraper().parse_week(html, 3).unwrap_err();
        assert!(matches!(err, ScrapeError::NoTopicRow(_)));
    }

    #[tokio::test]
    async fn test_unreachable_page_falls_back() {
        let config = Config {
            course_url: "http://127.0.0.1:1/course/".to_string(),
            page_timeout: std::time::Duration::from_millis(500),
            ..Config::default()
        };
        let topic = config.topic_regex().unwrap();
        let scraper = CoursePageScraper::new(HttpClient::new(), config, topic);

        let week = scraper.scrape_week(3).await;
        assert_eq!(week, fallback_week(3));
    }
}
