//! Course page acquisition.
//!
//! Fetches the raw HTML of the course page, finds the schedule table and the
//! topic row, and sorts the row's links into resource buckets. No browser
//! and no JavaScript: the schedule is plain static markup.

pub mod categorizer;
pub mod course_page;
pub mod fallback;
pub mod http_client;
pub mod schedule;
pub mod types;
