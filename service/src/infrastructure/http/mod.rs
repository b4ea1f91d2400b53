use anyhow::Context;
use axum::{Extension, Router};
use axum::routing::{delete, get, post, put};
use axum_prometheus::PrometheusMetricLayer;
use tokio::net;

use crate::domain::AppState;
use crate::infrastructure::realtime::RealtimeHub;

use handlers::agenda::{create_event, delete_event, list_agenda, update_event};
use handlers::articles::{
    all_articles, create_article, delete_article, get_article, published_articles, update_article,
};
use handlers::auth::{login, manager_login, verify};
use handlers::authorizations::{
    create_authorization, delete_authorization, get_authorization, list_authorizations,
    update_authorization,
};
use handlers::health_check;
use handlers::info::{create_info, delete_info, list_info, update_info};
use handlers::live::live_socket;
use handlers::stats::get_stats;
use handlers::videos::{
    all_videos, create_video, delete_video, get_video, published_videos, update_video,
};
use handlers::webradio::{
    all_shows, create_show, current_questions, current_show, delete_question, delete_show,
    get_show, post_question, published_shows, update_show,
};

mod api;
mod handlers;
mod querystring;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

/// The application's HTTP server. The underlying HTTP package is opaque to module consumers.
pub struct HttpServer {
    router: axum::Router,
    listener: net::TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        state: impl AppState,
        hub: RealtimeHub,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            },
        );
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

        let router = Router::new()
            .route("/health", get(health_check))
            .nest("/api", api_routes())
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(Extension(hub))
            .layer(trace_layer)
            .layer(prometheus_layer)
            .with_state(state);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.listener.local_addr().unwrap());
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

fn api_routes<S: AppState>() -> Router<S> {
    Router::new()
        .route("/articles", get(published_articles::<S>).post(create_article::<S>))
        .route("/articles/all", get(all_articles::<S>))
        .route(
            "/articles/{id}",
            get(get_article::<S>)
                .put(update_article::<S>)
                .delete(delete_article::<S>),
        )
        .route("/videos", get(published_videos::<S>).post(create_video::<S>))
        .route("/videos/all", get(all_videos::<S>))
        .route(
            "/videos/{id}",
            get(get_video::<S>)
                .put(update_video::<S>)
                .delete(delete_video::<S>),
        )
        .route("/webradio/shows", get(published_shows::<S>).post(create_show::<S>))
        .route("/webradio/shows/all", get(all_shows::<S>))
        .route("/webradio/shows/current", get(current_show::<S>))
        .route(
            "/webradio/shows/{id}",
            get(get_show::<S>)
                .put(update_show::<S>)
                .delete(delete_show::<S>),
        )
        .route(
            "/webradio/questions",
            get(current_questions::<S>).post(post_question::<S>),
        )
        .route("/webradio/questions/{id}", delete(delete_question::<S>))
        .route(
            "/authorizations",
            get(list_authorizations::<S>).post(create_authorization::<S>),
        )
        .route(
            "/authorizations/{id}",
            get(get_authorization::<S>)
                .put(update_authorization::<S>)
                .delete(delete_authorization::<S>),
        )
        .route("/agenda", get(list_agenda::<S>).post(create_event::<S>))
        .route("/agenda/{id}", put(update_event::<S>).delete(delete_event::<S>))
        .route("/info", get(list_info::<S>).post(create_info::<S>))
        .route("/info/{id}", put(update_info::<S>).delete(delete_info::<S>))
        .route("/auth/login", post(login::<S>))
        .route("/auth/manager", post(manager_login::<S>))
        .route("/auth/verify", get(verify::<S>))
        .route("/stats", get(get_stats::<S>))
        .route("/live", get(live_socket::<S>))
}
