use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A video as served by `GET /api/videos`.
///
/// Fields default to empty strings so a record with missing keys still
/// decodes; rendering falls back through [`Video::list_key`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel: String,
}

impl Video {
    /// Key used to render this video inside a list.
    ///
    /// Prefers the backend id, then the YouTube id, then the position.
    pub fn list_key(&self, index: usize) -> String {
        fallback_key(&[&self.id, &self.video_id], index)
    }

    /// Keys for a whole list, unique even when the backend repeats ids.
    pub fn list_keys(videos: &[Video]) -> Vec<String> {
        unique_keys(videos.iter().enumerate().map(|(i, v)| v.list_key(i)))
    }

    pub fn thumbnail_url(&self) -> String {
        if !self.thumbnail.trim().is_empty() {
            return self.thumbnail.clone();
        }
        format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", self.video_id)
    }
}

/// A curriculum concept attached to a video through `GET /api/concepts/{videoId}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Concept {
    #[serde(rename = "_id")]
    pub id: String,
    pub concept: String,
    pub reference: String,
}

impl Concept {
    pub fn list_key(&self, index: usize) -> String {
        fallback_key(&[&self.id], index)
    }

    pub fn list_keys(concepts: &[Concept]) -> Vec<String> {
        unique_keys(concepts.iter().enumerate().map(|(i, c)| c.list_key(i)))
    }
}

fn fallback_key(candidates: &[&str], index: usize) -> String {
    candidates
        .iter()
        .find(|c| !c.is_empty())
        .map(|c| c.to_string())
        .unwrap_or_else(|| index.to_string())
}

/// A repeated key gets its position appended, then a counter if that is
/// taken as well.
fn unique_keys(keys: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.enumerate()
        .map(|(index, key)| {
            let mut candidate = key.clone();
            let mut attempt = 0;
            while !seen.insert(candidate.clone()) {
                candidate = match attempt {
                    0 => format!("{key}#{index}"),
                    n => format!("{key}#{index}-{n}"),
                };
                attempt += 1;
            }
            candidate
        })
        .collect()
}
