// Copyright 2026 Cortex Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use coursepack::cli::scrape_cmd::{self, ScrapeOptions};
use coursepack::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "coursepack",
    about = "Scrape a course schedule page and write a week bundle",
    version
)]
struct Cli {
    /// Week number to scrape
    #[arg(long, default_value = "3")]
    week: u32,

    /// Output JSON file
    #[arg(long, default_value = "week3_real_data.json")]
    output: PathBuf,

    /// Skip Parallel enrichment
    #[arg(long)]
    no_enrich: bool,

    /// Course page to scrape (overrides the built-in CSE 120 page)
    #[arg(long)]
    course_url: Option<String>,

    /// Topic row pattern, matched case-insensitively
    #[arg(long)]
    topic: Option<String>,

    /// Suppress the banner and summary
    #[arg(long, short)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "coursepack=debug"
    } else if cli.quiet {
        "coursepack=warn"
    } else {
        "coursepack=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();

    let mut config = Config::from_env();
    if let Some(url) = cli.course_url {
        config.course_url = url;
    }
    if let Some(topic) = cli.topic {
        config.topic_pattern = topic;
    }

    let opts = ScrapeOptions {
        week: cli.week,
        output: cli.output,
        no_enrich: cli.no_enrich,
        quiet: cli.quiet,
    };

    if let Err(e) = scrape_cmd::run(config, &opts).await {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
