use std::future::Future;

use antenne_common::{
    AgendaEvent, Article, Authorization, Category, InfoBlock, NewArticle, NewAuthorization,
    NewEvent, NewQuestion, NewShow, NewVideo, Video, WebradioQuestion, WebradioShow,
};

use crate::domain::authorizations::SignedDecision;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound,
    ValidationFailed(String),
    UniqueViolation(String),
    DatabaseError(String),
}

/// Listing filter shared by the article and video surfaces: the public site
/// sees published items only, optionally narrowed to one category.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub only_published: bool,
    pub category: Option<Category>,
}

pub trait ArticleRepository: Send + Sync + 'static {
    fn list(
        &self,
        filter: ContentFilter,
    ) -> impl Future<Output = Result<Vec<Article>, RepositoryError>> + Send;

    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Article>, RepositoryError>> + Send;

    /// Most recently created article; the fallback target when an
    /// authorization is submitted without an explicit id.
    fn find_latest(&self) -> impl Future<Output = Result<Option<Article>, RepositoryError>> + Send;

    fn create(&self, new: NewArticle) -> impl Future<Output = Result<i64, RepositoryError>> + Send;

    fn update(&self, article: &Article) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn record_view(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn category_counts(
        &self,
    ) -> impl Future<Output = Result<Vec<(String, i64)>, RepositoryError>> + Send;
}

pub trait VideoRepository: Send + Sync + 'static {
    fn list(
        &self,
        filter: ContentFilter,
    ) -> impl Future<Output = Result<Vec<Video>, RepositoryError>> + Send;

    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Video>, RepositoryError>> + Send;

    fn find_latest(&self) -> impl Future<Output = Result<Option<Video>, RepositoryError>> + Send;

    fn create(&self, new: NewVideo) -> impl Future<Output = Result<i64, RepositoryError>> + Send;

    fn update(&self, video: &Video) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn category_counts(
        &self,
    ) -> impl Future<Output = Result<Vec<(String, i64)>, RepositoryError>> + Send;

    fn platform_counts(
        &self,
    ) -> impl Future<Output = Result<Vec<(String, i64)>, RepositoryError>> + Send;
}

/// Counts per lifecycle stage, for the newsroom dashboard.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowStatusCounts {
    pub draft: i64,
    pub waiting: i64,
    pub live: i64,
    pub waiting_podcast: i64,
    pub published: i64,
}

pub trait ShowRepository: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<WebradioShow>, RepositoryError>> + Send;

    fn published(&self) -> impl Future<Output = Result<Vec<WebradioShow>, RepositoryError>> + Send;

    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<WebradioShow>, RepositoryError>> + Send;

    fn find_latest(
        &self,
    ) -> impl Future<Output = Result<Option<WebradioShow>, RepositoryError>> + Send;

    /// The show currently occupying the antenna: any live-family status,
    /// most recent first.
    fn current(&self) -> impl Future<Output = Result<Option<WebradioShow>, RepositoryError>> + Send;

    /// Insert; when the new status is live-family the write runs inside a
    /// transaction that first checks no other show occupies the antenna, and
    /// surfaces a violation as `UniqueViolation("A show is already live")`.
    fn create(&self, new: NewShow) -> impl Future<Output = Result<i64, RepositoryError>> + Send;

    /// Full-row update, with the same mutual-exclusion guarantee as `create`.
    fn update(
        &self,
        show: &WebradioShow,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn status_counts(
        &self,
    ) -> impl Future<Output = Result<ShowStatusCounts, RepositoryError>> + Send;
}

pub trait AuthorizationRepository: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<Authorization>, RepositoryError>> + Send;

    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Authorization>, RepositoryError>> + Send;

    /// Insert inside a transaction that first verifies no open record exists
    /// for the same (element_type, element_id); a duplicate surfaces as
    /// `UniqueViolation("Authorization already exists")`.
    fn create(
        &self,
        new: NewAuthorization,
    ) -> impl Future<Output = Result<i64, RepositoryError>> + Send;

    /// Owner edit of a draft: element reference, content, submit date and
    /// status are replaced; response fields stay untouched.
    fn update_submission(
        &self,
        authorization: &Authorization,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn respond(
        &self,
        id: i64,
        decision: &SignedDecision,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Cascade used when a content item is deleted.
    fn delete_for_element(
        &self,
        element_type: &str,
        element_id: i64,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

pub trait AgendaRepository: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<AgendaEvent>, RepositoryError>> + Send;

    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<AgendaEvent>, RepositoryError>> + Send;

    fn create(&self, new: NewEvent) -> impl Future<Output = Result<i64, RepositoryError>> + Send;

    fn update(
        &self,
        event: &AgendaEvent,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

pub trait QuestionRepository: Send + Sync + 'static {
    fn for_show(
        &self,
        show_id: i64,
    ) -> impl Future<Output = Result<Vec<WebradioQuestion>, RepositoryError>> + Send;

    fn create(&self, new: NewQuestion)
    -> impl Future<Output = Result<i64, RepositoryError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

pub trait InfoRepository: Send + Sync + 'static {
    fn list(
        &self,
        include_disabled: bool,
    ) -> impl Future<Output = Result<Vec<InfoBlock>, RepositoryError>> + Send;

    fn create(
        &self,
        html: String,
        css: String,
    ) -> impl Future<Output = Result<i64, RepositoryError>> + Send;

    fn update(&self, info: &InfoBlock) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}
