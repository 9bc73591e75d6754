//! The scrape command: course page → week bundle on disk.

use crate::acquisition::course_page::CoursePageScraper;
use crate::acquisition::http_client::HttpClient;
use crate::bundle::{RunKind, WeekBundle};
use crate::cli::output;
use crate::config::Config;
use crate::enrichment::{structure_without_enrichment, Enricher, ParallelClient};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

/// Options for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub week: u32,
    pub output: PathBuf,
    pub no_enrich: bool,
    pub quiet: bool,
}

/// Scrape, enrich (unless disabled), assemble and write the bundle.
///
/// Only an invalid topic pattern or an unwritable output file is an error;
/// every network or parsing problem degrades to fallback data.
pub async fn run(config: Config, opts: &ScrapeOptions) -> Result<WeekBundle> {
    let topic = config.topic_regex()?;
    let http = HttpClient::new();

    if !opts.quiet {
        output::print_banner();
    }

    let scraper = CoursePageScraper::new(http.clone(), config.clone(), topic);
    let week = scraper.scrape_week(opts.week).await;

    let (content, kind) = if opts.no_enrich {
        warn!("skipping Parallel enrichment (--no-enrich flag)");
        (structure_without_enrichment(&week), RunKind::HeuristicOnly)
    } else {
        match ParallelClient::from_config(http, &config) {
            Some(client) => {
                let enricher = Enricher::new(client, config.rate_limit_delay);
                let content = enricher.enrich_week(&week).await;
                info!("enrichment complete");
                (content, RunKind::Enriched)
            }
            None => {
                warn!("no Parallel API key found, skipping enrichment");
                (structure_without_enrichment(&week), RunKind::HeuristicOnly)
            }
        }
    };

    let bundle = WeekBundle::assemble(&config, &week, content, kind);
    bundle.write(&opts.output)?;
    info!("saved to {}", opts.output.display());

    if !opts.quiet {
        output::print_summary(&bundle, &opts.output);
    }

    Ok(bundle)
}
