//! Content status transition rules.
//!
//! Everything here is pure: handlers load the current row, apply a rule, and
//! hand the result back to a repository. Validation happens before any
//! mutation is computed.

use antenne_common::{
    Article, ArticleStatus, Category, ShowStatus, Video, VideoPlatform, VideoStatus, WebradioShow,
};
use chrono::{DateTime, Utc};

use crate::domain::DomainError;

/// Field-by-field patch for an article; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnail_src: Option<String>,
    pub category: Option<Category>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<ArticleStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub video_id: Option<String>,
    pub platform: Option<VideoPlatform>,
    pub category: Option<Category>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<VideoStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub stream_id: Option<String>,
    pub podcast_id: Option<String>,
    pub prompter: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<ShowStatus>,
}

/// Date stamping rule: crossing from the approval queue into publication
/// re-stamps the date to "now" so date-ordered listings reflect publish
/// order; any other change keeps the stored date unless one was supplied.
pub fn stamped_date(
    crosses_publication: bool,
    prior: DateTime<Utc>,
    supplied: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    if crosses_publication {
        now
    } else {
        supplied.unwrap_or(prior)
    }
}

/// A show may not enter a live status without a stream source.
pub fn check_show_stream(status: ShowStatus, stream_id: Option<&str>) -> Result<(), DomainError> {
    if status.requires_stream() && stream_id.map_or(true, |s| s.is_empty()) {
        return Err(DomainError::missing_parameters());
    }
    Ok(())
}

/// Crossing detection for the realtime feed and the notification hook:
/// fire exactly once, on entry.
pub fn entered_live(before: ShowStatus, after: ShowStatus) -> bool {
    !before.is_live() && after.is_live()
}

pub fn left_live(before: ShowStatus, after: ShowStatus) -> bool {
    before.is_live() && !after.is_live()
}

pub fn apply_article_update(
    current: &Article,
    update: ArticleUpdate,
    now: DateTime<Utc>,
) -> Article {
    let status = update.status.unwrap_or(current.status);
    let crosses = ArticleStatus::crosses_publication(current.status, status);

    Article {
        id: current.id,
        title: update.title.unwrap_or_else(|| current.title.clone()),
        body: update.body.unwrap_or_else(|| current.body.clone()),
        thumbnail: update.thumbnail.unwrap_or_else(|| current.thumbnail.clone()),
        thumbnail_src: update
            .thumbnail_src
            .unwrap_or_else(|| current.thumbnail_src.clone()),
        category: update
            .category
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| current.category.clone()),
        author: update.author.unwrap_or_else(|| current.author.clone()),
        views: current.views,
        date: stamped_date(crosses, current.date, update.date, now),
        status,
    }
}

pub fn apply_video_update(current: &Video, update: VideoUpdate, now: DateTime<Utc>) -> Video {
    let status = update.status.unwrap_or(current.status);
    let crosses = VideoStatus::crosses_publication(current.status, status);

    Video {
        id: current.id,
        title: update.title.unwrap_or_else(|| current.title.clone()),
        description: update
            .description
            .unwrap_or_else(|| current.description.clone()),
        thumbnail: update.thumbnail.unwrap_or_else(|| current.thumbnail.clone()),
        video_id: update.video_id.unwrap_or_else(|| current.video_id.clone()),
        platform: update
            .platform
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| current.platform.clone()),
        category: update
            .category
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| current.category.clone()),
        author: update.author.unwrap_or_else(|| current.author.clone()),
        date: stamped_date(crosses, current.date, update.date, now),
        status,
    }
}

/// Merge a patch into a show row, enforcing the stream requirement on the
/// resulting state. The mutual-exclusion rule is left to the repository,
/// which checks it under the same transaction as the write.
pub fn apply_show_update(
    current: &WebradioShow,
    update: ShowUpdate,
) -> Result<WebradioShow, DomainError> {
    let status = update.status.unwrap_or(current.status);
    let stream_id = update.stream_id.or_else(|| current.stream_id.clone());

    check_show_stream(status, stream_id.as_deref())?;

    Ok(WebradioShow {
        id: current.id,
        title: update.title.unwrap_or_else(|| current.title.clone()),
        description: update
            .description
            .unwrap_or_else(|| current.description.clone()),
        thumbnail: update.thumbnail.unwrap_or_else(|| current.thumbnail.clone()),
        stream_id,
        podcast_id: update.podcast_id.or_else(|| current.podcast_id.clone()),
        prompter: update.prompter.or_else(|| current.prompter.clone()),
        date: update.date.unwrap_or(current.date),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use antenne_common::StreamVariant::*;
    use chrono::TimeZone;

    fn article(status: ArticleStatus, date: DateTime<Utc>) -> Article {
        Article {
            id: 1,
            title: "Le cross du collège".into(),
            body: "<p>…</p>".into(),
            thumbnail: "cross.webp".into(),
            thumbnail_src: "club photo".into(),
            category: "sport".into(),
            author: "M. Martin".into(),
            views: 12,
            date,
            status,
        }
    }

    fn show(status: ShowStatus, stream_id: Option<&str>) -> WebradioShow {
        WebradioShow {
            id: 7,
            title: "Émission de rentrée".into(),
            description: "La première de l'année".into(),
            thumbnail: "rentree.webp".into(),
            stream_id: stream_id.map(String::from),
            podcast_id: None,
            prompter: Some("Bienvenue…".into()),
            date: Utc.with_ymd_and_hms(2024, 9, 2, 17, 0, 0).unwrap(),
            status,
        }
    }

    #[test]
    fn pending_to_published_restamps_date() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap();
        let current = article(ArticleStatus::Pending, created);

        let updated = apply_article_update(
            &current,
            ArticleUpdate {
                status: Some(ArticleStatus::Published),
                ..Default::default()
            },
            now,
        );

        assert_eq!(updated.status, ArticleStatus::Published);
        assert_eq!(updated.date, now);
    }

    #[test]
    fn other_transitions_keep_the_date() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap();

        // draft -> published does not come out of the approval queue
        let current = article(ArticleStatus::Draft, created);
        let updated = apply_article_update(
            &current,
            ArticleUpdate {
                status: Some(ArticleStatus::Published),
                ..Default::default()
            },
            now,
        );
        assert_eq!(updated.date, created);

        // plain edit of a published article
        let current = article(ArticleStatus::Published, created);
        let updated = apply_article_update(
            &current,
            ArticleUpdate {
                title: Some("Le cross du collège, bilan".into()),
                ..Default::default()
            },
            now,
        );
        assert_eq!(updated.date, created);
        assert_eq!(updated.title, "Le cross du collège, bilan");
    }

    #[test]
    fn supplied_date_overrides_outside_a_crossing() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let supplied = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap();

        let current = article(ArticleStatus::Published, created);
        let updated = apply_article_update(
            &current,
            ArticleUpdate {
                date: Some(supplied),
                ..Default::default()
            },
            now,
        );
        assert_eq!(updated.date, supplied);
    }

    #[test]
    fn video_pending_to_published_restamps_date() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        let current = Video {
            id: 3,
            title: "Interview du principal".into(),
            description: "…".into(),
            thumbnail: "itw.webp".into(),
            video_id: "dQw4w9WgXcQ".into(),
            platform: "youtube".into(),
            category: "news".into(),
            author: "La rédaction".into(),
            date: created,
            status: VideoStatus::Pending,
        };

        let updated = apply_video_update(
            &current,
            VideoUpdate {
                status: Some(VideoStatus::Published),
                ..Default::default()
            },
            now,
        );
        assert_eq!(updated.date, now);
    }

    #[test]
    fn live_entry_requires_a_stream_source() {
        let current = show(ShowStatus::Waiting(Primary), None);

        let err = apply_show_update(
            &current,
            ShowUpdate {
                status: Some(ShowStatus::Live(Primary)),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, DomainError::missing_parameters());

        // restream variant enforces the same rule
        let err = apply_show_update(
            &current,
            ShowUpdate {
                status: Some(ShowStatus::Live(Restream)),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, DomainError::missing_parameters());
    }

    #[test]
    fn live_entry_with_stream_passes() {
        let current = show(ShowStatus::Waiting(Primary), Some("yt-live-123"));
        let updated = apply_show_update(
            &current,
            ShowUpdate {
                status: Some(ShowStatus::Live(Primary)),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.status, ShowStatus::Live(Primary));
    }

    #[test]
    fn stream_supplied_in_same_patch_counts() {
        let current = show(ShowStatus::Waiting(Primary), None);
        let updated = apply_show_update(
            &current,
            ShowUpdate {
                stream_id: Some("yt-live-123".into()),
                status: Some(ShowStatus::Live(Primary)),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.stream_id.as_deref(), Some("yt-live-123"));
    }

    #[test]
    fn empty_stream_is_no_stream() {
        assert!(check_show_stream(ShowStatus::Live(Primary), Some("")).is_err());
        assert!(check_show_stream(ShowStatus::Live(Primary), None).is_err());
        assert!(check_show_stream(ShowStatus::Waiting(Primary), None).is_ok());
    }

    #[test]
    fn live_crossing_fires_once() {
        assert!(entered_live(ShowStatus::Waiting(Primary), ShowStatus::Live(Primary)));
        assert!(!entered_live(ShowStatus::Live(Primary), ShowStatus::Live(Restream)));
        assert!(!entered_live(ShowStatus::Live(Primary), ShowStatus::Live(Primary)));
        assert!(left_live(ShowStatus::Live(Restream), ShowStatus::WaitingPodcast));
        assert!(!left_live(ShowStatus::Waiting(Primary), ShowStatus::Draft(Primary)));
    }
}
