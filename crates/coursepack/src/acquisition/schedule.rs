//! Schedule table discovery and topic row extraction.
//!
//! Course pages usually carry several tables (office hours, TA lists,
//! grading) next to the week-by-week schedule. The locator picks the schedule
//! by its headers, and falls back to sniffing a `9/25`-style date in the
//! first data cell. The extractor then walks that table for the first row
//! matching the topic pattern.

use super::types::Resource;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Header substrings that mark a schedule table. Case-sensitive.
const SCHEDULE_HEADERS: &[&str] = &["Date", "Lecture", "Readings"];

/// Rows logged at debug level while searching for the topic.
const DEBUG_ROWS: usize = 20;

/// The row picked out for the target topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRow {
    /// Topic label (lecture title cell).
    pub topic: String,
    /// Every `<a href>` in the row, URLs made absolute.
    pub links: Vec<Resource>,
}

struct Selectors {
    table: Selector,
    th: Selector,
    tr: Selector,
    td: Selector,
    cell: Selector,
    link: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| Selectors {
        table: Selector::parse("table").unwrap(),
        th: Selector::parse("th").unwrap(),
        tr: Selector::parse("tr").unwrap(),
        td: Selector::parse("td").unwrap(),
        cell: Selector::parse("td, th").unwrap(),
        link: Selector::parse("a[href]").unwrap(),
    })
}

fn date_pattern() -> &'static Regex {
    static DATE: OnceLock<Regex> = OnceLock::new();
    DATE.get_or_init(|| Regex::new(r"^\d{1,2}/\d{1,2}").expect("date pattern"))
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

// ── Locator ─────────────────────────────────────────────────────────────────

/// Find the schedule table in a parsed document.
///
/// A table with a "Date", "Lecture" or "Readings" header wins wherever it
/// sits in the document. Only when no table has such a header is the
/// date-in-first-cell rule tried.
pub fn locate_schedule_table(document: &Html) -> Option<ElementRef<'_>> {
    let sel = selectors();
    let tables: Vec<ElementRef<'_>> = document.select(&sel.table).collect();
    tracing::info!("found {} tables on page", tables.len());

    if let Some((i, table)) = tables
        .iter()
        .enumerate()
        .find(|(_, t)| has_schedule_headers(t))
    {
        tracing::info!("found schedule table (table #{i})");
        return Some(*table);
    }

    if let Some((i, table)) = tables
        .iter()
        .enumerate()
        .find(|(_, t)| starts_with_date(t))
    {
        tracing::info!("found schedule table by date pattern (table #{i})");
        return Some(*table);
    }

    None
}

fn has_schedule_headers(table: &ElementRef<'_>) -> bool {
    let header_text = table
        .select(&selectors().th)
        .map(|th| element_text(&th))
        .collect::<Vec<_>>()
        .join(" ");
    SCHEDULE_HEADERS.iter().any(|h| header_text.contains(h))
}

fn starts_with_date(table: &ElementRef<'_>) -> bool {
    let sel = selectors();
    let Some(first_data_row) = table
        .select(&sel.tr)
        .find(|tr| tr.select(&sel.td).next().is_some())
    else {
        return false;
    };
    first_data_row
        .select(&sel.cell)
        .next()
        .map(|cell| date_pattern().is_match(&element_text(&cell)))
        .unwrap_or(false)
}

// ── Extractor ───────────────────────────────────────────────────────────────

/// Find the first row whose text matches `topic` and pull out its links.
///
/// Rows with fewer than two cells are skipped. Relative hrefs are resolved
/// against `base_url`.
pub fn extract_topic_row(table: ElementRef<'_>, topic: &Regex, base_url: &str) -> Option<TopicRow> {
    let sel = selectors();
    let base = url::Url::parse(base_url).ok();

    for (i, row) in table.select(&sel.tr).enumerate() {
        let cells: Vec<ElementRef<'_>> = row.select(&sel.cell).collect();
        if cells.len() < 2 {
            continue;
        }

        let row_text = cells
            .iter()
            .map(element_text)
            .collect::<Vec<_>>()
            .join(" ");

        if i < DEBUG_ROWS {
            let preview: String = row_text.chars().take(100).collect();
            tracing::debug!("row {i}: {preview}");
        }

        if !topic.is_match(&row_text) {
            continue;
        }

        let label_cell = cells.get(1).or(cells.first())?;
        let label = element_text(label_cell);
        tracing::info!("found topic '{label}' in row {i}");

        let links: Vec<Resource> = row
            .select(&sel.link)
            .map(|a| {
                let href = a.value().attr("href").unwrap_or("");
                Resource::new(resolve_href(base.as_ref(), href), element_text(&a))
            })
            .collect();
        tracing::info!("found {} links in topic row", links.len());

        return Some(TopicRow {
            topic: label,
            links,
        });
    }

    None
}

/// Make an href absolute unless it already looks like an absolute http(s) URL.
fn resolve_href(base: Option<&url::Url>, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }
    base.and_then(|b| b.join(href).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| href.to_string())
}
