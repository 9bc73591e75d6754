//! Data scraped off the course page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hyperlink found in the topic row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub url: String,
    pub title: String,
}

impl Resource {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Resource bucket a link is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Textbook,
    Slides,
    Homework,
    Papers,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Textbook => "textbook",
            Self::Slides => "slides",
            Self::Homework => "homework",
            Self::Papers => "papers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorized links, in the order they appeared in the row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBucket {
    pub textbook: Vec<Resource>,
    pub slides: Vec<Resource>,
    pub homework: Vec<Resource>,
    pub papers: Vec<Resource>,
}

impl ResourceBucket {
    /// Append a resource to the bucket for `category`.
    pub fn push(&mut self, category: Category, resource: Resource) {
        self.get_mut(category).push(resource);
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<Resource> {
        match category {
            Category::Textbook => &mut self.textbook,
            Category::Slides => &mut self.slides,
            Category::Homework => &mut self.homework,
            Category::Papers => &mut self.papers,
        }
    }

    /// Total resources across all buckets.
    pub fn len(&self) -> usize {
        self.textbook.len() + self.slides.len() + self.homework.len() + self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything scraped for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekData {
    pub week: u32,
    pub topic: String,
    pub resources: ResourceBucket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_push_and_len() {
        let mut bucket = ResourceBucket::default();
        assert!(bucket.is_empty());
        bucket.push(Category::Slides, Resource::new("https://a/x.pdf", "x"));
        bucket.push(Category::Slides, Resource::new("https://a/y.pdf", "y"));
        bucket.push(Category::Papers, Resource::new("https://a/z", "z"));
        assert_eq!(bucket.len(), 3);
        assert_eq!(bucket.slides[1].title, "y");
        assert!(bucket.textbook.is_empty());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let s = serde_json::to_string(&Category::Homework).unwrap();
        assert_eq!(s, "\"homework\"");
        assert_eq!(Category::Textbook.to_string(), "textbook");
    }
}
