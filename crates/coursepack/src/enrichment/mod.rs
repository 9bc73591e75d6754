//! Resource enrichment through the Parallel API, with heuristic fallbacks.

pub mod enricher;
pub mod heuristics;
pub mod parallel;
pub mod records;

pub use enricher::{structure_without_enrichment, Enricher, Outcome};
pub use parallel::ParallelClient;
pub use records::{
    fallback_papers, EnrichedContent, HomeworkRecord, Paper, SlidesRecord, TextbookRecord,
};
