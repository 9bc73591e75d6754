//! CLI implementation for the coursepack binary.

pub mod output;
pub mod scrape_cmd;
