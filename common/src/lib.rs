mod database;
mod domain;

// Table names shared by the service queries and the migration DDL

pub const ARTICLES_TABLE: &'static str = "articles";
pub const VIDEOS_TABLE: &'static str = "videos";
pub const SHOWS_TABLE: &'static str = "webradio_shows";
pub const QUESTIONS_TABLE: &'static str = "webradio_questions";
pub const AUTHORIZATIONS_TABLE: &'static str = "authorizations";
pub const AGENDA_TABLE: &'static str = "agenda";
pub const INFO_TABLE: &'static str = "info";

// expose domain module

pub use domain::*;

// expose database module

pub use database::{Database, DatabaseConnection, DatabaseCredentials, DatabaseSettings, connect_to_database};
