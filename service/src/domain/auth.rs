//! Credential checking is an external concern; the domain only needs a
//! pass/fail gate for the newsroom admin and an identity for managers.

/// Checks a bearer credential. Implementations decide what a token is; the
/// domain never inspects one.
pub trait AuthGate: Send + Sync + 'static {
    /// True when the token belongs to the newsroom admin.
    fn is_admin(&self, token: &str) -> bool;

    /// The manager id behind the token, when it is a manager credential.
    fn manager_id(&self, token: &str) -> Option<String>;

    /// Exchange the newsroom credentials for a bearer token.
    fn admin_login(&self, username: &str, password: &str) -> Option<String>;
}

/// Parallel id/name lists configured at deployment; the id a token resolves
/// to is mapped to a display name before it is stamped on a record.
#[derive(Debug, Clone)]
pub struct ManagerRoster {
    ids: Vec<String>,
    names: Vec<String>,
}

impl ManagerRoster {
    pub fn new(ids: Vec<String>, names: Vec<String>) -> Self {
        Self { ids, names }
    }

    pub fn name_of(&self, manager_id: &str) -> Option<&str> {
        self.ids
            .iter()
            .position(|id| id == manager_id)
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_maps_ids_to_names_positionally() {
        let roster = ManagerRoster::new(
            vec!["man-01".into(), "man-02".into()],
            vec!["J. Dupont".into(), "C. Bernard".into()],
        );

        assert_eq!(roster.name_of("man-01"), Some("J. Dupont"));
        assert_eq!(roster.name_of("man-02"), Some("C. Bernard"));
        assert_eq!(roster.name_of("man-03"), None);
    }

    #[test]
    fn unbalanced_roster_resolves_nothing_extra() {
        let roster = ManagerRoster::new(vec!["man-01".into(), "man-02".into()], vec!["J. Dupont".into()]);
        assert_eq!(roster.name_of("man-02"), None);
    }
}
