//! Week bundle assembly and output.
//!
//! The bundle is plain aggregation: course metadata, the week, and the four
//! result collections stamped with a run id and a UTC timestamp.

use crate::acquisition::types::WeekData;
use crate::config::Config;
use crate::enrichment::records::{
    EnrichedContent, HomeworkRecord, Paper, SlidesRecord, TextbookRecord,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the content in a bundle was produced. Decides the run id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// The enrichment API was called.
    Enriched,
    /// Heuristics only (`--no-enrich` or no API key).
    HeuristicOnly,
}

impl RunKind {
    fn run_id(self, at: DateTime<Utc>) -> String {
        match self {
            RunKind::Enriched => format!("scrape-{}", at.timestamp()),
            RunKind::HeuristicOnly => format!("scrape-no-parallel-{}", at.timestamp()),
        }
    }
}

/// Output document for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBundle {
    pub course_code: String,
    pub institution: String,
    pub week_number: u32,
    pub week_topic: String,
    pub aggregated_content: AggregatedContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedContent {
    pub textbooks: Vec<TextbookRecord>,
    pub slides: Vec<SlidesRecord>,
    pub homework: Vec<HomeworkRecord>,
    pub papers: Vec<Paper>,
    pub parallel_run_id: String,
    pub aggregated_at: String,
}

impl WeekBundle {
    /// Assemble a bundle stamped with the current time.
    pub fn assemble(
        config: &Config,
        week: &WeekData,
        content: EnrichedContent,
        kind: RunKind,
    ) -> Self {
        Self::assemble_at(config, week, content, kind, Utc::now())
    }

    /// Assemble a bundle stamped with `at`.
    pub fn assemble_at(
        config: &Config,
        week: &WeekData,
        content: EnrichedContent,
        kind: RunKind,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            course_code: config.course_code.clone(),
            institution: config.institution.clone(),
            week_number: week.week,
            week_topic: week.topic.clone(),
            aggregated_content: AggregatedContent {
                textbooks: content.textbooks,
                slides: content.slides,
                homework: content.homework,
                papers: content.papers,
                parallel_run_id: kind.run_id(at),
                aggregated_at: at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            },
        }
    }

    /// Pretty JSON with 2-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize week bundle")
    }

    /// Write the bundle to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}
