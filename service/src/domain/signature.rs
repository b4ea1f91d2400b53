//! Decision signing: the proof that a specific manager answered a specific
//! request on a specific day.

use chrono::NaiveDate;

/// Signs a decision statement with the outlet's private key; the encoded
/// signature is stored alongside the authorization record.
pub trait DecisionSigner: Send + Sync + 'static {
    fn sign(&self, statement: &str) -> String;
}

/// The sentence the signature binds the manager to. Wording and the fr-FR
/// date format are part of the stored proof and must not drift.
pub fn decision_statement(approved: bool, manager: &str, on: NaiveDate) -> String {
    let verdict = if approved { "accordée" } else { "refusée" };
    format!(
        "Autorisation de publication {verdict} par {manager} le {}.",
        on.format("%d/%m/%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_embeds_verdict_name_and_date() {
        let on = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        assert_eq!(
            decision_statement(true, "J. Dupont", on),
            "Autorisation de publication accordée par J. Dupont le 02/03/2024."
        );
        assert_eq!(
            decision_statement(false, "J. Dupont", on),
            "Autorisation de publication refusée par J. Dupont le 02/03/2024."
        );
    }
}
