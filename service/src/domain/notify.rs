//! Notification dispatch: tell the relevant humans a decision is wanted or
//! was made. Delivery is a push-messaging API behind the `Notifier` port;
//! failures there are logged, never propagated, so a committed status change
//! is never rolled back by a messaging outage.

use antenne_common::{Authorization, AuthorizationContent, AuthorizationStatus, ElementType};

/// One card in the push channel: a title line, a subtitle and optionally a
/// thumbnail plus a link to the review page.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushCard {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Fire-and-forget delivery. Implementations must not block the caller and
/// must swallow (but log) transport errors.
pub trait Notifier: Send + Sync + 'static {
    /// A submission awaits review: goes to the manager roster.
    fn review_requested(&self, card: PushCard);

    /// A manager answered: goes back to the newsroom.
    fn decision_delivered(&self, card: PushCard);
}

/// The card sent to managers when a submission lands. The subtitle selects
/// per content type: shows announce the estimated broadcast duration,
/// videos their runtime, articles just the label.
pub fn review_card(
    element_type: ElementType,
    element_title: &str,
    thumbnail: &str,
    authorization: &Authorization,
) -> PushCard {
    let content = AuthorizationContent::parse(&authorization.content);

    let subtitle = match element_type {
        ElementType::Show => format!(
            "Émission\nDurée : {}",
            content.estimated_duration.as_deref().unwrap_or("non précisée")
        ),
        ElementType::Video => format!(
            "Vidéo\nDurée : {}",
            content.duration.as_deref().unwrap_or("non précisée")
        ),
        ElementType::Article => "Article".to_string(),
    };

    PushCard {
        title: element_title.to_string(),
        subtitle,
        image: Some(thumbnail.to_string()),
        link: Some(format!("/verif?id={}", authorization.id)),
    }
}

/// The card sent back to the newsroom once a manager has answered.
pub fn decision_card(element_title: &str, authorization: &Authorization) -> PushCard {
    let verdict = match authorization.status {
        AuthorizationStatus::Approved => "accordée",
        _ => "refusée",
    };
    let manager = authorization.manager.as_deref().unwrap_or("le responsable");

    PushCard {
        title: element_title.to_string(),
        subtitle: format!("Autorisation {verdict} par {manager}"),
        image: None,
        link: Some(format!("/verif?id={}", authorization.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn authorization(content: &str) -> Authorization {
        Authorization {
            id: 12,
            element_type: "show".into(),
            element_id: 4,
            content: content.into(),
            status: AuthorizationStatus::Submitted,
            submit_date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            manager: None,
            comments: None,
            response_date: None,
            signature: None,
        }
    }

    #[test]
    fn show_card_announces_estimated_duration() {
        let auth = authorization(r#"{"estimatedDuration":"45 min"}"#);
        let card = review_card(ElementType::Show, "Émission de rentrée", "rentree.webp", &auth);

        assert_eq!(card.title, "Émission de rentrée");
        assert_eq!(card.subtitle, "Émission\nDurée : 45 min");
        assert_eq!(card.link.as_deref(), Some("/verif?id=12"));
    }

    #[test]
    fn video_card_uses_runtime_article_card_a_label() {
        let auth = authorization(r#"{"duration":"5:12"}"#);
        let card = review_card(ElementType::Video, "Interview", "itw.webp", &auth);
        assert_eq!(card.subtitle, "Vidéo\nDurée : 5:12");

        let auth = authorization("{}");
        let card = review_card(ElementType::Article, "Le cross", "cross.webp", &auth);
        assert_eq!(card.subtitle, "Article");
    }

    #[test]
    fn missing_duration_does_not_break_the_card() {
        let auth = authorization("{}");
        let card = review_card(ElementType::Show, "Émission", "a.webp", &auth);
        assert_eq!(card.subtitle, "Émission\nDurée : non précisée");
    }

    #[test]
    fn decision_card_names_the_verdict() {
        let mut auth = authorization("{}");
        auth.status = AuthorizationStatus::Approved;
        auth.manager = Some("J. Dupont".into());

        let card = decision_card("Le cross", &auth);
        assert_eq!(card.subtitle, "Autorisation accordée par J. Dupont");

        auth.status = AuthorizationStatus::Rejected;
        let card = decision_card("Le cross", &auth);
        assert_eq!(card.subtitle, "Autorisation refusée par J. Dupont");
    }
}
