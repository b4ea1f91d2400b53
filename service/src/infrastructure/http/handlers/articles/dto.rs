use antenne_common::{Article, ArticleStatus, Category, NewArticle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::lifecycle::ArticleUpdate;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// Create and update share one payload; create requires the editorial
/// fields, update treats everything as a patch.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_src: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<i16>,
}

impl ArticlePayload {
    pub fn into_new(self) -> Result<NewArticle, DomainError> {
        let status = self
            .status
            .ok_or_else(DomainError::missing_parameters)
            .and_then(parse_status)?;
        let category = self
            .category
            .as_deref()
            .ok_or_else(DomainError::missing_parameters)
            .and_then(parse_category)?;

        match (self.title, self.body, self.thumbnail, self.thumbnail_src, self.author) {
            (Some(title), Some(body), Some(thumbnail), Some(thumbnail_src), Some(author))
                if !title.is_empty() && !body.is_empty() =>
            {
                Ok(NewArticle {
                    title,
                    body,
                    thumbnail,
                    thumbnail_src,
                    category,
                    author,
                    date: self.date,
                    status,
                })
            }
            _ => Err(DomainError::missing_parameters()),
        }
    }

    pub fn into_update(self) -> Result<ArticleUpdate, DomainError> {
        let status = self.status.map(parse_status).transpose()?;
        let category = self.category.as_deref().map(parse_category).transpose()?;

        Ok(ArticleUpdate {
            title: self.title,
            body: self.body,
            thumbnail: self.thumbnail,
            thumbnail_src: self.thumbnail_src,
            category,
            author: self.author,
            date: self.date,
            status,
        })
    }
}

pub(super) fn parse_status(code: i16) -> Result<ArticleStatus, DomainError> {
    ArticleStatus::try_from(code).map_err(|_| DomainError::invalid_parameters())
}

pub(super) fn parse_category(value: &str) -> Result<Category, DomainError> {
    Category::parse(value).ok_or_else(DomainError::invalid_parameters)
}

pub fn parse_category_filter(value: Option<String>) -> Result<Option<Category>, DomainError> {
    value.as_deref().filter(|v| !v.is_empty()).map(parse_category).transpose()
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ArticlePayload {
        ArticlePayload {
            title: Some("Le cross du collège".into()),
            body: Some("<p>…</p>".into()),
            thumbnail: Some("cross.webp".into()),
            thumbnail_src: Some("club photo".into()),
            category: Some("sport".into()),
            author: Some("M. Martin".into()),
            date: None,
            status: Some(-2),
        }
    }

    #[test]
    fn create_requires_every_editorial_field() {
        assert!(full_payload().into_new().is_ok());

        let mut payload = full_payload();
        payload.title = None;
        assert_eq!(
            payload.into_new(),
            Err(DomainError::missing_parameters())
        );
    }

    #[test]
    fn out_of_set_status_is_rejected_before_any_write() {
        let mut payload = full_payload();
        payload.status = Some(0);
        assert_eq!(payload.into_new(), Err(DomainError::invalid_parameters()));

        let patch = ArticlePayload {
            status: Some(1),
            ..Default::default()
        };
        assert_eq!(patch.into_update(), Err(DomainError::invalid_parameters()));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut payload = full_payload();
        payload.category = Some("cuisine".into());
        assert_eq!(payload.into_new(), Err(DomainError::invalid_parameters()));
    }

    #[test]
    fn empty_filter_means_no_filter() {
        assert_eq!(parse_category_filter(None), Ok(None));
        assert_eq!(parse_category_filter(Some(String::new())), Ok(None));
        assert_eq!(
            parse_category_filter(Some("tech".into())),
            Ok(Some(Category::Tech))
        );
        assert!(parse_category_filter(Some("cuisine".into())).is_err());
    }
}
