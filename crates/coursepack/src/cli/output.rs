//! Human-readable console output for the CLI.

use crate::bundle::WeekBundle;
use std::path::Path;

/// Local endpoint that imports a saved bundle.
const IMPORT_ENDPOINT: &str = "http://localhost:5173/api/week/aggregate-content";

const RULE_WIDTH: usize = 60;

pub fn print_banner() {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("Course Scraper with Parallel Enrichment");
    println!("{rule}");
}

/// Print counts for each collection and the import hint.
pub fn print_summary(bundle: &WeekBundle, output: &Path) {
    print!("{}", render_summary(bundle, output));
}

pub fn render_summary(bundle: &WeekBundle, output: &Path) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let content = &bundle.aggregated_content;
    let out = output.display();

    format!(
        "\nSaved to: {out}\n\n\
         {rule}\nSUMMARY\n{rule}\n\
         Course: {} - Week {}\n\
         Topic: {}\n\
         Textbooks: {}\n\
         Slides: {}\n\
         Homework: {}\n\
         Papers: {}\n\n\
         Scraping complete!\n\n\
         Next step: Import to database with:\n  \
         curl -X POST {IMPORT_ENDPOINT} \\\n    \
         -H 'Content-Type: application/json' \\\n    \
         --data @{out}\n",
        bundle.course_code,
        bundle.week_number,
        bundle.week_topic,
        content.textbooks.len(),
        content.slides.len(),
        content.homework.len(),
        content.papers.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::fallback::fallback_week;
    use crate::bundle::RunKind;
    use crate::config::Config;
    use crate::enrichment::structure_without_enrichment;

    #[test]
    fn test_render_summary_counts() {
        let week = fallback_week(3);
        let bundle = WeekBundle::assemble(
            &Config::default(),
            &week,
            structure_without_enrichment(&week),
            RunKind::HeuristicOnly,
        );
        let text = render_summary(&bundle, Path::new("week3_real_data.json"));

        assert!(text.contains("Course: CSE 120 - Week 3\n"));
        assert!(text.contains("Topic: Process Scheduling\n"));
        assert!(text.contains("Textbooks: 2\n"));
        assert!(text.contains("Slides: 1\n"));
        assert!(text.contains("Homework: 1\n"));
        assert!(text.contains("Papers: 3\n"));
        assert!(text.contains(
            "  curl -X POST http://localhost:5173/api/week/aggregate-content \\\n"
        ));
        assert!(text.contains("    --data @week3_real_data.json\n"));
    }
}
