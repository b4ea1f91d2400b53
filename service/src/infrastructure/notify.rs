use serde_json::json;

use crate::domain::notify::{Notifier, PushCard};
use crate::infrastructure::settings::PushSettings;

/// Delivers cards through the push-messaging graph API.
///
/// Delivery is spawned and forgotten: the status change that triggered a
/// card is already committed, so a transport failure is logged and dropped,
/// never surfaced to the request.
#[derive(Clone)]
pub struct PushNotifier {
    client: reqwest::Client,
    api_url: String,
    api_token: String,
    manager_recipients: Vec<String>,
    newsroom_recipients: Vec<String>,
}

impl PushNotifier {
    pub fn new(settings: &PushSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: settings.api_url.clone(),
            api_token: settings.api_token.clone(),
            manager_recipients: settings.manager_recipients.clone(),
            newsroom_recipients: settings.newsroom_recipients.clone(),
        }
    }

    fn dispatch(&self, recipients: &[String], card: PushCard) {
        for recipient in recipients {
            let client = self.client.clone();
            let url = format!("{}/me/messages", self.api_url);
            let token = self.api_token.clone();
            let payload = json!({
                "recipient": { "id": recipient },
                "message": card,
            });
            let recipient = recipient.clone();

            tokio::spawn(async move {
                let result = client
                    .post(&url)
                    .bearer_auth(&token)
                    .json(&payload)
                    .send()
                    .await;

                match result {
                    Ok(response) if !response.status().is_success() => {
                        tracing::warn!(
                            recipient = %recipient,
                            status = %response.status(),
                            "push delivery refused"
                        );
                    }
                    Err(error) => {
                        tracing::warn!(recipient = %recipient, %error, "push delivery failed");
                    }
                    _ => {}
                }
            });
        }
    }
}

impl Notifier for PushNotifier {
    fn review_requested(&self, card: PushCard) {
        self.dispatch(&self.manager_recipients, card);
    }

    fn decision_delivered(&self, card: PushCard) {
        self.dispatch(&self.newsroom_recipients, card);
    }
}
