//! Link categorization.
//!
//! Rules are an ordered slice of `(predicate, category)` pairs evaluated
//! top-down; the first predicate that holds decides the bucket. The last rule
//! always holds, so every link lands in exactly one bucket.
//!
//! Order matters: textbook rules are checked before homework rules, so a link
//! titled "Homework Ch. 3" is a textbook reading.

use super::types::{Category, Resource, ResourceBucket};
use regex::Regex;
use std::sync::OnceLock;

/// Filename of the semaphore slide deck on the course site.
const KNOWN_SLIDE_DECK: &str = "/sema.pdf";

/// Lowercased inputs shared by every rule.
struct LinkSignals {
    url: String,
    text: String,
}

type Rule = (fn(&LinkSignals) -> bool, Category);

const RULES: &[Rule] = &[
    (is_textbook, Category::Textbook),
    (is_homework, Category::Homework),
    (is_slides, Category::Slides),
    (is_paper, Category::Papers),
    (is_pdf, Category::Slides),
    (|_| true, Category::Papers),
];

struct Patterns {
    chapter: Regex,
    hw: Regex,
    pr: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        chapter: Regex::new(r"ch\.?\s*\d+").expect("chapter pattern"),
        hw: Regex::new(r"hw\s*\d+").expect("hw pattern"),
        pr: Regex::new(r"pr\s*\d+").expect("pr pattern"),
    })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn is_textbook(s: &LinkSignals) -> bool {
    patterns().chapter.is_match(&s.text)
        || contains_any(&s.text, &["chapter", "textbook", "reading"])
}

fn is_homework(s: &LinkSignals) -> bool {
    contains_any(&s.text, &["homework", "assignment", "project"])
        || patterns().hw.is_match(&s.text)
        || patterns().pr.is_match(&s.text)
}

fn is_slides(s: &LinkSignals) -> bool {
    s.text.contains("slide")
        || s.url.contains(".ppt")
        || (s.url.contains("lecture") && s.url.ends_with(".pdf"))
        || s.url.contains(KNOWN_SLIDE_DECK)
}

fn is_paper(s: &LinkSignals) -> bool {
    contains_any(&s.text, &["paper", "language", "optional", "cv"])
        || contains_any(&s.url, &["arxiv", "acm", "ieee"])
}

fn is_pdf(s: &LinkSignals) -> bool {
    s.url.ends_with(".pdf")
}

/// Classify a link by its URL and anchor text.
pub fn categorize(url: &str, text: &str) -> Category {
    let signals = LinkSignals {
        url: url.to_lowercase(),
        text: text.to_lowercase(),
    };

    RULES
        .iter()
        .find(|(matches, _)| matches(&signals))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Papers)
}

/// Categorize every link and collect them into a bucket, preserving order.
pub fn categorize_all(links: impl IntoIterator<Item = Resource>) -> ResourceBucket {
    let mut bucket = ResourceBucket::default();
    for link in links {
        let category = categorize(&link.url, &link.title);
        tracing::debug!("categorized '{}' → {category}", link.title);
        bucket.push(category, link);
    }
    bucket
}
