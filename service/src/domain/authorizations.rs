//! Authorization workflow rules: submission, owner edits, manager response.
//!
//! The functions here decide; repositories persist. Keeping the decisions
//! free of I/O is what makes the state machine testable without a database.

use antenne_common::{Authorization, AuthorizationStatus, ElementType};
use chrono::{DateTime, Utc};

use crate::domain::DomainError;
use crate::domain::signature::decision_statement;

/// Raw submission fields as they arrive from the owner. `element_id` 0 or
/// absent means "the most recently created item of that type".
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    pub element_type: Option<String>,
    pub element_id: Option<i64>,
    pub content: Option<String>,
    pub status: Option<i16>,
}

/// A validated submission, before element resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSubmission {
    pub element_type: ElementType,
    /// 0 still means "latest of that type"; the caller resolves it and
    /// stores the resolved id, never the literal 0.
    pub requested_id: i64,
    pub content: String,
    pub status: AuthorizationStatus,
}

/// Validate a submission: known element type, non-empty content payload,
/// and the requested status folded to Submitted (-1) or Draft (everything
/// else).
pub fn prepare_submission(request: &SubmissionRequest) -> Result<PreparedSubmission, DomainError> {
    let element_type = request
        .element_type
        .as_deref()
        .and_then(ElementType::parse)
        .ok_or_else(DomainError::invalid_parameters)?;

    let content = match request.content.as_deref() {
        Some(content) if !content.is_empty() => content.to_string(),
        _ => return Err(DomainError::invalid_parameters()),
    };

    let status = match request.status {
        Some(-1) => AuthorizationStatus::Submitted,
        _ => AuthorizationStatus::Draft,
    };

    Ok(PreparedSubmission {
        element_type,
        requested_id: request.element_id.unwrap_or(0),
        content,
        status,
    })
}

/// What an owner edit of an existing record amounts to.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnerUpdate {
    /// The record was a draft; these are the replacement fields.
    Updated(PreparedSubmission),
    /// The record was rejected; the edit opens a fresh submission instead.
    Resubmit,
}

/// Only drafts can be edited in place. A rejected record is resubmitted as
/// a new one; a submitted or approved record is immutable for the owner.
pub fn apply_owner_update(
    current: &Authorization,
    request: &SubmissionRequest,
) -> Result<OwnerUpdate, DomainError> {
    match current.status {
        AuthorizationStatus::Rejected => return Ok(OwnerUpdate::Resubmit),
        AuthorizationStatus::Draft => {}
        AuthorizationStatus::Submitted | AuthorizationStatus::Approved => {
            return Err(DomainError::Conflict(
                "Authorization already submitted".to_string(),
            ));
        }
    }

    // absent fields fall back to the stored submission
    let merged = SubmissionRequest {
        element_type: request
            .element_type
            .clone()
            .or_else(|| Some(current.element_type.clone())),
        element_id: request.element_id.or(Some(current.element_id)),
        content: request.content.clone().or_else(|| Some(current.content.clone())),
        status: request.status,
    };

    prepare_submission(&merged).map(OwnerUpdate::Updated)
}

/// A manager's resolved response, ready to be signed.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub status: AuthorizationStatus,
    pub manager: String,
    pub comments: String,
    pub response_date: DateTime<Utc>,
    /// The human-readable sentence the signature binds the manager to.
    pub statement: String,
}

/// A decision plus the signature over its statement; what gets persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedDecision {
    pub decision: Decision,
    pub signature: String,
}

/// Validate a manager response: the record must still be awaiting one, and
/// the requested status must be a decision code (approve = 2, reject = 1).
pub fn decide(
    current: &Authorization,
    requested_status: Option<i16>,
    comments: Option<String>,
    manager: &str,
    now: DateTime<Utc>,
) -> Result<Decision, DomainError> {
    if current.status != AuthorizationStatus::Submitted {
        return Err(DomainError::Conflict(
            "Response already submitted".to_string(),
        ));
    }

    let status = match requested_status {
        Some(2) => AuthorizationStatus::Approved,
        Some(1) => AuthorizationStatus::Rejected,
        _ => return Err(DomainError::invalid_parameters()),
    };

    let comments = comments
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "Non spécifié".to_string());

    let statement = decision_statement(
        status == AuthorizationStatus::Approved,
        manager,
        now.date_naive(),
    );

    Ok(Decision {
        status,
        manager: manager.to_string(),
        comments,
        response_date: now,
        statement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn authorization(status: AuthorizationStatus) -> Authorization {
        Authorization {
            id: 7,
            element_type: "article".into(),
            element_id: 42,
            content: r#"{"duration":"5"}"#.into(),
            status,
            submit_date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            manager: None,
            comments: None,
            response_date: None,
            signature: None,
        }
    }

    #[test]
    fn submission_requires_known_element_type_and_content() {
        let request = SubmissionRequest {
            element_type: Some("article".into()),
            element_id: Some(0),
            content: Some(r#"{"duration":"5"}"#.into()),
            status: Some(-1),
        };
        let prepared = prepare_submission(&request).unwrap();
        assert_eq!(prepared.element_type, ElementType::Article);
        assert_eq!(prepared.requested_id, 0);
        assert_eq!(prepared.status, AuthorizationStatus::Submitted);

        let bad_type = SubmissionRequest {
            element_type: Some("podcast".into()),
            ..request.clone()
        };
        assert_eq!(
            prepare_submission(&bad_type),
            Err(DomainError::invalid_parameters())
        );

        let no_content = SubmissionRequest {
            content: None,
            ..request.clone()
        };
        assert_eq!(
            prepare_submission(&no_content),
            Err(DomainError::invalid_parameters())
        );

        let empty_content = SubmissionRequest {
            content: Some(String::new()),
            ..request
        };
        assert_eq!(
            prepare_submission(&empty_content),
            Err(DomainError::invalid_parameters())
        );
    }

    #[test]
    fn anything_but_submit_is_saved_as_draft() {
        let mut request = SubmissionRequest {
            element_type: Some("video".into()),
            element_id: Some(3),
            content: Some("{}".into()),
            status: None,
        };
        assert_eq!(
            prepare_submission(&request).unwrap().status,
            AuthorizationStatus::Draft
        );

        request.status = Some(5);
        assert_eq!(
            prepare_submission(&request).unwrap().status,
            AuthorizationStatus::Draft
        );
    }

    #[test]
    fn owner_may_edit_drafts_only() {
        let request = SubmissionRequest {
            status: Some(-1),
            ..Default::default()
        };

        let draft = authorization(AuthorizationStatus::Draft);
        let updated = apply_owner_update(&draft, &request).unwrap();
        match updated {
            OwnerUpdate::Updated(prepared) => {
                // untouched fields carried over from the stored record
                assert_eq!(prepared.element_type, ElementType::Article);
                assert_eq!(prepared.requested_id, 42);
                assert_eq!(prepared.status, AuthorizationStatus::Submitted);
            }
            other => panic!("expected Updated, got {other:?}"),
        }

        let submitted = authorization(AuthorizationStatus::Submitted);
        assert_eq!(
            apply_owner_update(&submitted, &request),
            Err(DomainError::Conflict("Authorization already submitted".into()))
        );

        let approved = authorization(AuthorizationStatus::Approved);
        assert!(apply_owner_update(&approved, &request).is_err());

        let rejected = authorization(AuthorizationStatus::Rejected);
        assert_eq!(
            apply_owner_update(&rejected, &request),
            Ok(OwnerUpdate::Resubmit)
        );
    }

    #[test]
    fn response_requires_an_open_submission() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();

        for settled in [
            AuthorizationStatus::Draft,
            AuthorizationStatus::Approved,
            AuthorizationStatus::Rejected,
        ] {
            let record = authorization(settled);
            let err = decide(&record, Some(2), None, "J. Dupont", now).unwrap_err();
            assert_eq!(err, DomainError::Conflict("Response already submitted".into()));
        }
    }

    #[test]
    fn response_status_must_be_a_decision() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
        let record = authorization(AuthorizationStatus::Submitted);

        for bad in [None, Some(0), Some(-1), Some(3)] {
            assert_eq!(
                decide(&record, bad, None, "J. Dupont", now),
                Err(DomainError::invalid_parameters())
            );
        }
    }

    #[test]
    fn approval_stamps_manager_date_and_statement() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
        let record = authorization(AuthorizationStatus::Submitted);

        let decision = decide(&record, Some(2), Some("OK pour moi".into()), "J. Dupont", now)
            .unwrap();
        assert_eq!(decision.status, AuthorizationStatus::Approved);
        assert_eq!(decision.manager, "J. Dupont");
        assert_eq!(decision.comments, "OK pour moi");
        assert_eq!(decision.response_date, now);
        assert!(decision.statement.contains("accordée"));
    }

    #[test]
    fn rejection_defaults_comments_and_flips_the_statement() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
        let record = authorization(AuthorizationStatus::Submitted);

        let decision = decide(&record, Some(1), None, "J. Dupont", now).unwrap();
        assert_eq!(decision.status, AuthorizationStatus::Rejected);
        assert_eq!(decision.comments, "Non spécifié");
        assert!(decision.statement.contains("refusée"));

        // blank comments count as absent
        let decision = decide(&record, Some(1), Some("   ".into()), "J. Dupont", now).unwrap();
        assert_eq!(decision.comments, "Non spécifié");
    }
}
