//! Static week data used when the course page cannot be scraped.

use super::types::{Resource, ResourceBucket, WeekData};

/// Placeholder week used after a fetch or discovery failure.
pub fn fallback_week(week: u32) -> WeekData {
    let topic = if week == 3 {
        "Process Scheduling".to_string()
    } else {
        format!("Week {week} Topic")
    };

    WeekData {
        week,
        topic,
        resources: ResourceBucket {
            textbook: vec![
                Resource::new(
                    "https://example.com/silberschatz-ch5.pdf",
                    "Silberschatz Chapter 5",
                ),
                Resource::new("https://example.com/tanenbaum-ch2.pdf", "Tanenbaum Chapter 2"),
            ],
            slides: vec![Resource::new(
                "https://example.com/week3-slides.pdf",
                "Week 3 Lecture Slides",
            )],
            homework: vec![Resource::new("https://example.com/ps3.pdf", "Problem Set 3")],
            papers: Vec::new(),
        },
    }
}
