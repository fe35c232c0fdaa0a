use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CONTENT: &str = include_str!("../content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate work item id {0}")]
    DuplicateWorkId(u32),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub media: String,
}

impl WorkItem {
    pub fn is_video(&self) -> bool {
        is_video_url(&self.media)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub title: String,
    pub video: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
}

impl Content {
    pub fn parse(document: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(document)?;

        let mut seen = HashSet::new();
        for item in &content.work_items {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateWorkId(item.id));
            }
        }

        Ok(content)
    }

    /// The copy compiled into the binary. A broken document renders empty
    /// sections instead of taking the page down.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_CONTENT).unwrap_or_else(|err| {
            log::error!("failed to load page content: {err}");
            Self::default()
        })
    }
}

/// `.mp4` or `.mov`, optionally followed by a query string.
pub fn is_video_url(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or_default().to_ascii_lowercase();
    path.ends_with(".mp4") || path.ends_with(".mov")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = Content::parse(EMBEDDED_CONTENT).expect("embedded content is valid");
        assert_eq!(content.work_items.len(), 5);
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.blog_posts.len(), 3);
        assert!(content.work_items.iter().all(WorkItem::is_video));
        let sports = content.work_items.iter().find(|item| item.id == 3);
        assert_eq!(sports.map(|item| item.title.as_str()), Some("Sports"));
    }

    #[test]
    fn detects_video_urls() {
        assert!(is_video_url("https://cdn.example/clip.mp4"));
        assert!(is_video_url("https://cdn.example/CLIP.MOV"));
        assert!(is_video_url("https://cdn.example/clip.mp4?updatedAt=1"));
        assert!(!is_video_url("https://cdn.example/still.jpg"));
        assert!(!is_video_url("https://cdn.example/clip.mp4.jpg"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let document = r#"{
            "workItems": [
                {"id": 1, "title": "a", "category": "c", "media": "a.mp4"},
                {"id": 1, "title": "b", "category": "c", "media": "b.mp4"}
            ]
        }"#;

        assert!(matches!(Content::parse(document), Err(ContentError::DuplicateWorkId(1))));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let content = Content::parse("{}").expect("empty document is valid");
        assert_eq!(content, Content::default());
        assert!(matches!(Content::parse("not json"), Err(ContentError::Parse(_))));
    }
}
