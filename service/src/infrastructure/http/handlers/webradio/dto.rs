use antenne_common::{NewShow, ShowStatus, WebradioQuestion, WebradioShow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::lifecycle::ShowUpdate;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub stream_id: Option<String>,
    pub podcast_id: Option<String>,
    pub prompter: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// Numeric status code; the half steps are the restream variants.
    pub status: Option<f64>,
}

impl ShowPayload {
    pub fn into_new(self) -> Result<NewShow, DomainError> {
        let status = self
            .status
            .ok_or_else(DomainError::missing_parameters)
            .and_then(parse_status)?;

        match (self.title, self.description, self.thumbnail, self.prompter) {
            (Some(title), Some(description), Some(thumbnail), Some(prompter))
                if !title.is_empty() && !description.is_empty() =>
            {
                Ok(NewShow {
                    title,
                    description,
                    thumbnail,
                    stream_id: self.stream_id,
                    podcast_id: self.podcast_id,
                    prompter,
                    date: self.date,
                    status,
                })
            }
            _ => Err(DomainError::missing_parameters()),
        }
    }

    pub fn into_update(self) -> Result<ShowUpdate, DomainError> {
        let status = self.status.map(parse_status).transpose()?;

        Ok(ShowUpdate {
            title: self.title,
            description: self.description,
            thumbnail: self.thumbnail,
            stream_id: self.stream_id,
            podcast_id: self.podcast_id,
            prompter: self.prompter,
            date: self.date,
            status,
        })
    }
}

pub(super) fn parse_status(code: f64) -> Result<ShowStatus, DomainError> {
    ShowStatus::try_from(code).map_err(|_| DomainError::invalid_parameters())
}

#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShowsResponse {
    pub shows: Vec<WebradioShow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowsWithIdResponse {
    pub shows: Vec<WebradioShow>,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub show: WebradioShow,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<WebradioQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use antenne_common::StreamVariant;

    fn full_payload(status: f64) -> ShowPayload {
        ShowPayload {
            title: Some("Émission de rentrée".into()),
            description: Some("La première de l'année".into()),
            thumbnail: Some("rentree.webp".into()),
            stream_id: Some("yt-live-123".into()),
            podcast_id: None,
            prompter: Some("Bienvenue…".into()),
            date: None,
            status: Some(status),
        }
    }

    #[test]
    fn restream_half_steps_decode() {
        let new = full_payload(-1.5).into_new().unwrap();
        assert_eq!(new.status, ShowStatus::Waiting(StreamVariant::Restream));
    }

    #[test]
    fn codes_between_states_are_rejected() {
        assert_eq!(
            full_payload(1.5).into_new(),
            Err(DomainError::invalid_parameters())
        );
        assert_eq!(
            ShowPayload {
                status: Some(0.25),
                ..Default::default()
            }
            .into_update(),
            Err(DomainError::invalid_parameters())
        );
    }

    #[test]
    fn create_requires_prompter_and_description() {
        let mut payload = full_payload(-2.0);
        payload.prompter = None;
        assert_eq!(payload.into_new(), Err(DomainError::missing_parameters()));
    }
}
