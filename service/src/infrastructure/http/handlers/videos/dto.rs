use antenne_common::{Category, NewVideo, Video, VideoPlatform, VideoStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::lifecycle::VideoUpdate;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub video_id: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<i16>,
}

impl VideoPayload {
    pub fn into_new(self) -> Result<NewVideo, DomainError> {
        let status = self
            .status
            .ok_or_else(DomainError::missing_parameters)
            .and_then(parse_status)?;
        let platform = self
            .platform
            .as_deref()
            .ok_or_else(DomainError::missing_parameters)
            .and_then(parse_platform)?;
        let category = self
            .category
            .as_deref()
            .ok_or_else(DomainError::missing_parameters)
            .and_then(parse_category)?;

        match (self.title, self.description, self.thumbnail, self.video_id, self.author) {
            (Some(title), Some(description), Some(thumbnail), Some(video_id), Some(author))
                if !title.is_empty() && !video_id.is_empty() =>
            {
                Ok(NewVideo {
                    title,
                    description,
                    thumbnail,
                    video_id,
                    platform,
                    category,
                    author,
                    date: self.date,
                    status,
                })
            }
            _ => Err(DomainError::missing_parameters()),
        }
    }

    pub fn into_update(self) -> Result<VideoUpdate, DomainError> {
        let status = self.status.map(parse_status).transpose()?;
        let platform = self.platform.as_deref().map(parse_platform).transpose()?;
        let category = self.category.as_deref().map(parse_category).transpose()?;

        Ok(VideoUpdate {
            title: self.title,
            description: self.description,
            thumbnail: self.thumbnail,
            video_id: self.video_id,
            platform,
            category,
            author: self.author,
            date: self.date,
            status,
        })
    }
}

pub(super) fn parse_status(code: i16) -> Result<VideoStatus, DomainError> {
    VideoStatus::try_from(code).map_err(|_| DomainError::invalid_parameters())
}

pub(super) fn parse_platform(value: &str) -> Result<VideoPlatform, DomainError> {
    VideoPlatform::parse(value).ok_or_else(DomainError::invalid_parameters)
}

pub(super) fn parse_category(value: &str) -> Result<Category, DomainError> {
    Category::parse(value).ok_or_else(DomainError::invalid_parameters)
}

pub fn parse_category_filter(value: Option<String>) -> Result<Option<Category>, DomainError> {
    value.as_deref().filter(|v| !v.is_empty()).map(parse_category).transpose()
}

#[derive(Debug, Serialize)]
pub struct VideosResponse {
    pub videos: Vec<Video>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosWithIdResponse {
    pub videos: Vec<Video>,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub video: Video,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_is_a_closed_set() {
        assert!(parse_platform("youtube").is_ok());
        assert!(parse_platform("instagram").is_ok());
        assert_eq!(parse_platform("dailymotion"), Err(DomainError::invalid_parameters()));
    }

    #[test]
    fn video_status_rejects_show_codes() {
        assert!(parse_status(-1).is_ok());
        assert_eq!(parse_status(0), Err(DomainError::invalid_parameters()));
        assert_eq!(parse_status(1), Err(DomainError::invalid_parameters()));
    }
}
