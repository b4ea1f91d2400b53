use antenne_common::connect_to_database;

use crate::domain::auth::ManagerRoster;
use crate::infrastructure::AppStateImpl;
use crate::infrastructure::auth::TokenAuthGate;
use crate::infrastructure::http::{HttpServer, HttpServerConfig};
use crate::infrastructure::notify::PushNotifier;
use crate::infrastructure::persistence::PostgresStore;
use crate::infrastructure::realtime::RealtimeHub;
use crate::infrastructure::settings::Settings;
use crate::infrastructure::signature::Ed25519DecisionSigner;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod domain;
mod infrastructure;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database = connect_to_database(&settings.database).await?;
    println!("Connected to DB");

    let store = PostgresStore::new(database);
    let gate = TokenAuthGate::new(&settings.auth);
    let signer = Ed25519DecisionSigner::from_hex(&settings.signing.private_key_hex)?;
    let notifier = PushNotifier::new(&settings.push);
    let hub = RealtimeHub::new(64);
    let roster = ManagerRoster::new(
        settings.auth.manager_ids.clone(),
        settings.auth.manager_names.clone(),
    );

    let state = AppStateImpl::new(store, gate, signer, notifier, hub.clone(), roster);

    let server_config = HttpServerConfig {
        port: &settings.server_port,
    };
    let http_server = HttpServer::new(state, hub, server_config).await?;
    http_server.run().await
}
