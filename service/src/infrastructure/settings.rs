use std::env;

use anyhow::Context;
use antenne_common::DatabaseSettings;
use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_port: String,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub signing: SigningSettings,
    pub push: PushSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub admin_username: String,
    pub admin_password: String,
    pub admin_token: String,
    pub manager_tokens: Vec<ManagerToken>,
    /// Parallel lists: `manager_names[i]` is the display name of
    /// `manager_ids[i]`.
    pub manager_ids: Vec<String>,
    pub manager_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManagerToken {
    pub token: String,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SigningSettings {
    /// 32-byte ed25519 seed, hex-encoded. Never logged.
    pub private_key_hex: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushSettings {
    pub api_url: String,
    pub api_token: String,
    pub manager_recipients: Vec<String>,
    pub newsroom_recipients: Vec<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        let run_mode = load_env("RUN_MODE", "development");

        let s = Config::builder()
            .add_source(File::with_name("./config/default"))
            .add_source(File::with_name(&format!("./config/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("app").separator("_"))
            .build()?;

        s.try_deserialize().with_context(|| "failed to read config")
    }
}

fn load_env(key: &str, default_value: &'static str) -> String {
    env::var(key).unwrap_or_else(|_| default_value.into())
}
