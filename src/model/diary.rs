//! Diary (blog) documents as projected from the content API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    /// Minutes as a number or a preformatted label, whichever the editor entered.
    #[serde(default)]
    pub read_time: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<Value>,
}

/// Detail projection. `body` is the rich-text block array, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullDiaryEntry {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub body: Value,
}
