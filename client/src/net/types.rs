//! Wire types shared between the capture form and the waitlist store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::lead::LeadDraft;

/// One row of the `waitlist` collection, exactly as the store receives it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub business_type: String,
    pub employees_count: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub plan_interest: String,
}

impl LeadSubmission {
    /// Freeze a draft together with the plan interest that opened the form.
    #[must_use]
    pub fn from_draft(draft: &LeadDraft, plan_interest: &str) -> Self {
        Self {
            business_type: draft.business_type.clone(),
            employees_count: draft.employees_count.clone(),
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            plan_interest: plan_interest.to_owned(),
        }
    }
}

/// Why an insert into the waitlist store did not succeed.
///
/// The detail is for operators only; the form shows one fixed message for
/// every variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The build carries no store endpoint or key.
    #[error("waitlist store not configured: {0}")]
    NotConfigured(String),

    /// The record could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("store rejected insert: status {status}: {body}")]
    Rejected { status: u16, body: String },
}
