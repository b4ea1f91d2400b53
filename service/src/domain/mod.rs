use crate::domain::auth::{AuthGate, ManagerRoster};
use crate::domain::events::LiveEvents;
use crate::domain::notify::Notifier;
use crate::domain::repository::{
    AgendaRepository, ArticleRepository, AuthorizationRepository, InfoRepository,
    QuestionRepository, ShowRepository, VideoRepository,
};
use crate::domain::signature::DecisionSigner;

pub mod auth;
pub mod authorizations;
pub mod events;
pub mod lifecycle;
pub mod notify;
pub mod repository;
pub mod signature;

/// A rule violation detected before any write. The variants mirror the
/// HTTP-facing taxonomy: validation → 422, conflict → 409, not-found → 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    Validation(String),
    Conflict(String),
    NotFound(String),
}

impl DomainError {
    pub fn invalid_parameters() -> Self {
        Self::Validation("Invalid parameters".to_string())
    }

    pub fn missing_parameters() -> Self {
        Self::Validation("Missing parameters".to_string())
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) | Self::Conflict(message) | Self::NotFound(message) => {
                f.write_str(message)
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// The global application state shared between all request handlers.
pub trait AppState: Clone + Send + Sync + 'static {
    type Articles: ArticleRepository;
    type Videos: VideoRepository;
    type Shows: ShowRepository;
    type Authorizations: AuthorizationRepository;
    type Agenda: AgendaRepository;
    type Questions: QuestionRepository;
    type Info: InfoRepository;
    type Gate: AuthGate;
    type Signer: DecisionSigner;
    type Notify: Notifier;
    type Events: LiveEvents;

    fn articles(&self) -> &Self::Articles;
    fn videos(&self) -> &Self::Videos;
    fn shows(&self) -> &Self::Shows;
    fn authorizations(&self) -> &Self::Authorizations;
    fn agenda(&self) -> &Self::Agenda;
    fn questions(&self) -> &Self::Questions;
    fn info(&self) -> &Self::Info;
    fn gate(&self) -> &Self::Gate;
    fn signer(&self) -> &Self::Signer;
    fn notifier(&self) -> &Self::Notify;
    fn events(&self) -> &Self::Events;
    fn roster(&self) -> &ManagerRoster;
}
