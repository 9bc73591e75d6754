//! Output records for each resource category.
//!
//! Every record carries a fixed `confidence`: the category's success value
//! when the enrichment API answered, [`FALLBACK_CONFIDENCE`] otherwise.

use super::heuristics::{extract_authors, extract_chapter_number, extract_problem_numbers};
use crate::acquisition::types::{Category, Resource};
use serde::{Deserialize, Serialize};

/// Confidence of any record built without a successful API call.
pub const FALLBACK_CONFIDENCE: f64 = 0.70;

/// Page range placeholder for textbook readings.
pub const TEXTBOOK_PAGES: [u32; 2] = [1, 50];

/// Page count placeholder for slide decks.
pub const SLIDE_PAGES: u32 = 40;

/// A record type built from one scraped [`Resource`].
pub trait ResourceRecord: Sized {
    /// Bucket the record is built from.
    const CATEGORY: Category;
    /// Confidence after a successful search call.
    const ENRICHED_CONFIDENCE: f64;

    fn build(resource: &Resource, confidence: f64) -> Self;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextbookRecord {
    pub title: String,
    pub url: String,
    pub authors: Vec<String>,
    pub pages: [u32; 2],
    pub chapter: u32,
    pub confidence: f64,
}

impl ResourceRecord for TextbookRecord {
    const CATEGORY: Category = Category::Textbook;
    const ENRICHED_CONFIDENCE: f64 = 0.85;

    fn build(resource: &Resource, confidence: f64) -> Self {
        Self {
            title: resource.title.clone(),
            url: resource.url.clone(),
            authors: extract_authors(&resource.title),
            pages: TEXTBOOK_PAGES,
            chapter: extract_chapter_number(&resource.title),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlidesRecord {
    pub title: String,
    pub url: String,
    pub pages: u32,
    pub professor: String,
    pub confidence: f64,
}

impl ResourceRecord for SlidesRecord {
    const CATEGORY: Category = Category::Slides;
    const ENRICHED_CONFIDENCE: f64 = 0.90;

    fn build(resource: &Resource, confidence: f64) -> Self {
        Self {
            title: resource.title.clone(),
            url: resource.url.clone(),
            pages: SLIDE_PAGES,
            professor: "CSE 120 Staff".to_string(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub assignment: String,
    pub url: String,
    pub problems: Vec<String>,
    pub confidence: f64,
}

impl ResourceRecord for HomeworkRecord {
    const CATEGORY: Category = Category::Homework;
    const ENRICHED_CONFIDENCE: f64 = 0.85;

    fn build(resource: &Resource, confidence: f64) -> Self {
        Self {
            assignment: resource.title.clone(),
            url: resource.url.clone(),
            problems: extract_problem_numbers(&resource.title),
            confidence,
        }
    }
}

/// A research paper related to the week's topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub authors: Vec<String>,
    pub url: String,
    pub year: u32,
    pub venue: String,
    pub confidence: f64,
}

/// The three papers used whenever the task API gives nothing usable.
pub fn fallback_papers() -> Vec<Paper> {
    vec![
        Paper {
            title: "The Linux Completely Fair Scheduler".to_string(),
            authors: vec!["Ingo Molnar".to_string()],
            url: "https://www.kernel.org/doc/Documentation/scheduler/sched-design-CFS.txt"
                .to_string(),
            year: 2023,
            venue: "Linux Kernel Documentation".to_string(),
            confidence: 0.88,
        },
        Paper {
            title: "Lottery Scheduling: Flexible Proportional-Share Resource Management"
                .to_string(),
            authors: vec![
                "Carl A. Waldspurger".to_string(),
                "William E. Weihl".to_string(),
            ],
            url: "https://www.usenix.org/legacy/publications/library/proceedings/osdi/full_papers/waldspurger.pdf"
                .to_string(),
            year: 1994,
            venue: "OSDI".to_string(),
            confidence: 0.85,
        },
        Paper {
            title: "BFS vs CFS - Scheduler Comparison".to_string(),
            authors: vec!["Con Kolivas".to_string()],
            url: "https://ck-hack.blogspot.com/2013/10/bfs-vs-cfs-scheduler-comparison.html"
                .to_string(),
            year: 2023,
            venue: "Blog Post".to_string(),
            confidence: 0.75,
        },
    ]
}

/// The four result collections that go into a bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedContent {
    pub textbooks: Vec<TextbookRecord>,
    pub slides: Vec<SlidesRecord>,
    pub homework: Vec<HomeworkRecord>,
    pub papers: Vec<Paper>,
}
