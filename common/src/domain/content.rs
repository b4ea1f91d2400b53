use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::fields::{EventColor, QuestionText};
use crate::domain::status::{ArticleStatus, ShowStatus, VideoStatus};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Culture,
    Sport,
    Science,
    Tech,
    Laroche,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Culture => "culture",
            Self::Sport => "sport",
            Self::Science => "science",
            Self::Tech => "tech",
            Self::Laroche => "laroche",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "news" => Some(Self::News),
            "culture" => Some(Self::Culture),
            "sport" => Some(Self::Sport),
            "science" => Some(Self::Science),
            "tech" => Some(Self::Tech),
            "laroche" => Some(Self::Laroche),
            _ => None,
        }
    }

    pub const ALL: [Category; 6] = [
        Category::News,
        Category::Culture,
        Category::Sport,
        Category::Science,
        Category::Tech,
        Category::Laroche,
    ];
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
    Instagram,
}

impl VideoPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Instagram => "instagram",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "youtube" => Some(Self::Youtube),
            "instagram" => Some(Self::Instagram),
            _ => None,
        }
    }

    pub const ALL: [VideoPlatform; 2] = [VideoPlatform::Youtube, VideoPlatform::Instagram];
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// `date` is the creation time until the item crosses into publication;
/// after that crossing it is the publication time, so date-ordered listings
/// reflect publish order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub thumbnail: String,
    pub thumbnail_src: String,
    pub category: String,
    pub author: String,
    pub views: i32,
    pub date: DateTime<Utc>,
    pub status: ArticleStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_id: String,
    pub platform: String,
    pub category: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub status: VideoStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WebradioShow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub stream_id: Option<String>,
    pub podcast_id: Option<String>,
    /// Presenter notes; only admins may read this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompter: Option<String>,
    pub date: DateTime<Utc>,
    pub status: ShowStatus,
}

impl WebradioShow {
    /// Copy for unauthenticated readers.
    pub fn without_prompter(mut self) -> Self {
        self.prompter = None;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEvent {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub thumbnail: String,
    pub color: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WebradioQuestion {
    pub id: i64,
    pub show_id: i64,
    pub question: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InfoBlock {
    pub id: i64,
    pub html: String,
    pub css: String,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_round_trip_their_wire_names() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("cuisine"), None);
    }

    #[test]
    fn platforms_round_trip_their_wire_names() {
        for platform in VideoPlatform::ALL {
            assert_eq!(VideoPlatform::parse(platform.as_str()), Some(platform));
        }
        assert_eq!(VideoPlatform::parse("dailymotion"), None);
    }
}

// ---------------------------------------------------------------------------
// Creation payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub thumbnail: String,
    pub thumbnail_src: String,
    pub category: Category,
    pub author: String,
    pub date: Option<DateTime<Utc>>,
    pub status: ArticleStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_id: String,
    pub platform: VideoPlatform,
    pub category: Category,
    pub author: String,
    pub date: Option<DateTime<Utc>>,
    pub status: VideoStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub stream_id: Option<String>,
    pub podcast_id: Option<String>,
    pub prompter: String,
    pub date: Option<DateTime<Utc>>,
    pub status: ShowStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub content: String,
    pub thumbnail: String,
    pub color: EventColor,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub show_id: i64,
    pub question: QuestionText,
}
