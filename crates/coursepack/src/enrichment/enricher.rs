//! Per-resource enrichment with a fixed fallback.
//!
//! Each resource gets one search call. Whatever happens, the resource comes
//! out as exactly one record: a failed call only lowers its confidence to
//! [`FALLBACK_CONFIDENCE`]. Nothing in here returns an error.

use super::parallel::ParallelClient;
use super::records::{
    fallback_papers, EnrichedContent, HomeworkRecord, Paper, ResourceRecord, SlidesRecord,
    TextbookRecord, FALLBACK_CONFIDENCE,
};
use crate::acquisition::types::{Resource, WeekData};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Result of one enrichment attempt.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The API answered with HTTP 200. The body is kept but not decoded.
    Enriched(Value),
    /// The call failed.
    Fallback(String),
}

impl Outcome {
    /// Collapse the outcome into the record for `resource`.
    pub fn into_record<R: ResourceRecord>(self, resource: &Resource) -> R {
        let confidence = match self {
            Outcome::Enriched(_) => R::ENRICHED_CONFIDENCE,
            Outcome::Fallback(_) => FALLBACK_CONFIDENCE,
        };
        R::build(resource, confidence)
    }
}

/// Turns scraped week data into enriched content.
pub struct Enricher {
    client: ParallelClient,
    rate_limit_delay: Duration,
}

impl Enricher {
    pub fn new(client: ParallelClient, rate_limit_delay: Duration) -> Self {
        Self {
            client,
            rate_limit_delay,
        }
    }

    /// Enrich textbooks, slides and homework in order, then look up papers.
    ///
    /// The `papers` bucket of `week` is not enriched; papers come from the
    /// task API (or its fallback list).
    pub async fn enrich_week(&self, week: &WeekData) -> EnrichedContent {
        info!("enriching resources with Parallel...");
        let topic = week.topic.as_str();

        let textbooks = self
            .enrich_all::<TextbookRecord>(&week.resources.textbook, topic)
            .await;
        let slides = self
            .enrich_all::<SlidesRecord>(&week.resources.slides, topic)
            .await;
        let homework = self
            .enrich_all::<HomeworkRecord>(&week.resources.homework, topic)
            .await;

        info!("finding research papers on '{topic}'...");
        let papers = self.find_research_papers(topic).await;

        EnrichedContent {
            textbooks,
            slides,
            homework,
            papers,
        }
    }

    async fn enrich_all<R: ResourceRecord>(&self, resources: &[Resource], topic: &str) -> Vec<R> {
        let mut records = Vec::with_capacity(resources.len());
        for resource in resources {
            let short: String = resource.title.chars().take(50).collect();
            info!("enriching {}: {short}", R::CATEGORY);
            let outcome = self.search_resource(resource, R::CATEGORY.as_str(), topic).await;
            records.push(outcome.into_record::<R>(resource));
            tokio::time::sleep(self.rate_limit_delay).await;
        }
        records
    }

    async fn search_resource(&self, resource: &Resource, kind: &str, topic: &str) -> Outcome {
        let objective = format!(
            "Extract key concepts and summary from this {kind} about {topic}: {}",
            resource.url
        );
        match self.client.search(&objective).await {
            Ok(body) => Outcome::Enriched(body),
            Err(e) => {
                warn!("error enriching {}: {e}", resource.url);
                Outcome::Fallback(e.to_string())
            }
        }
    }

    /// Ask the task API for papers on `topic`.
    ///
    /// The run's output is not decoded into papers; every path returns
    /// [`fallback_papers`].
    pub async fn find_research_papers(&self, topic: &str) -> Vec<Paper> {
        match self.client.run_task(&paper_prompt(topic)).await {
            Ok(run) => {
                let run_id = run.get("run_id").and_then(Value::as_str).unwrap_or("?");
                debug!(run_id, "task run accepted; using fallback papers");
            }
            Err(e) => warn!("error finding papers: {e}"),
        }
        fallback_papers()
    }
}

/// Build records for every resource without calling the API.
pub fn structure_without_enrichment(week: &WeekData) -> EnrichedContent {
    fn heuristic<R: ResourceRecord>(resources: &[Resource]) -> Vec<R> {
        resources
            .iter()
            .map(|r| R::build(r, FALLBACK_CONFIDENCE))
            .collect()
    }

    EnrichedContent {
        textbooks: heuristic(&week.resources.textbook),
        slides: heuristic(&week.resources.slides),
        homework: heuristic(&week.resources.homework),
        papers: fallback_papers(),
    }
}

fn paper_prompt(topic: &str) -> String {
    format!(
        "Find 3-5 recent research papers (2020-2025) about {topic} in operating systems.\n\
         \n\
         For each paper, provide:\n\
         - Title\n\
         - Authors (list)\n\
         - Year\n\
         - Venue (conference or journal)\n\
         - URL (arxiv, ACM, IEEE, or official paper URL)\n\
         \n\
         Focus on semaphores, monitors, condition variables, synchronization, and concurrency."
    )
}
