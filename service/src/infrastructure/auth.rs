use std::collections::HashMap;

use crate::domain::auth::AuthGate;
use crate::infrastructure::settings::AuthSettings;

/// Token-table gate: the admin bearer token and the manager tokens come
/// from deployment configuration. Token issuance and rotation happen
/// outside this service.
#[derive(Clone)]
pub struct TokenAuthGate {
    admin_username: String,
    admin_password: String,
    admin_token: String,
    manager_tokens: HashMap<String, String>,
}

impl TokenAuthGate {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            admin_username: settings.admin_username.clone(),
            admin_password: settings.admin_password.clone(),
            admin_token: settings.admin_token.clone(),
            manager_tokens: settings
                .manager_tokens
                .iter()
                .map(|m| (m.token.clone(), m.id.clone()))
                .collect(),
        }
    }
}

impl AuthGate for TokenAuthGate {
    fn is_admin(&self, token: &str) -> bool {
        !token.is_empty() && token == self.admin_token
    }

    fn manager_id(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        self.manager_tokens.get(token).cloned()
    }

    fn admin_login(&self, username: &str, password: &str) -> Option<String> {
        if username == self.admin_username && password == self.admin_password {
            Some(self.admin_token.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::settings::ManagerToken;

    fn gate() -> TokenAuthGate {
        TokenAuthGate::new(&AuthSettings {
            admin_username: "redaction".into(),
            admin_password: "s3cret".into(),
            admin_token: "admin-token".into(),
            manager_tokens: vec![ManagerToken {
                token: "man-token-1".into(),
                id: "man-01".into(),
            }],
            manager_ids: vec!["man-01".into()],
            manager_names: vec!["J. Dupont".into()],
        })
    }

    #[test]
    fn admin_token_passes_manager_token_does_not() {
        let gate = gate();
        assert!(gate.is_admin("admin-token"));
        assert!(!gate.is_admin("man-token-1"));
        assert!(!gate.is_admin(""));
    }

    #[test]
    fn manager_tokens_resolve_to_ids() {
        let gate = gate();
        assert_eq!(gate.manager_id("man-token-1").as_deref(), Some("man-01"));
        assert_eq!(gate.manager_id("admin-token"), None);
        assert_eq!(gate.manager_id(""), None);
    }

    #[test]
    fn login_checks_both_fields() {
        let gate = gate();
        assert_eq!(
            gate.admin_login("redaction", "s3cret").as_deref(),
            Some("admin-token")
        );
        assert!(gate.admin_login("redaction", "wrong").is_none());
        assert!(gate.admin_login("intrus", "s3cret").is_none());
    }
}
