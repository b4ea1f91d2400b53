use antenne_common::Authorization;
use serde::{Deserialize, Serialize};

use crate::domain::authorizations::SubmissionRequest;

/// One payload for every write: the owner submits/edits with the element
/// fields, the manager answers with `status` and `comments`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationPayload {
    pub element_type: Option<String>,
    pub element_id: Option<i64>,
    pub content: Option<String>,
    pub status: Option<i16>,
    pub comments: Option<String>,
}

impl AuthorizationPayload {
    pub fn submission(&self) -> SubmissionRequest {
        SubmissionRequest {
            element_type: self.element_type.clone(),
            element_id: self.element_id,
            content: self.content.clone(),
            status: self.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorizationsResponse {
    pub authorizations: Vec<Authorization>,
}

#[derive(Debug, Serialize)]
pub struct AuthorizationResponse {
    pub authorization: Authorization,
}
