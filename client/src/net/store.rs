//! Client for the hosted waitlist store, plus the submit flow that drives the
//! capture form through one insert.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`.
//! Server-side (SSR) and native tests: `RestStore` never leaves the process;
//! tests plug their own `WaitlistStore`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a `SubmissionError`, is logged with its detail, and
//! reaches the form only as "failed". Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use async_trait::async_trait;
use leptos::logging::{error, log, warn};

use super::types::{LeadSubmission, SubmissionError};
use crate::config::{ConfigError, StoreConfig};
use crate::state::form::{FormHandle, FormPhase, WaitlistForm};

/// Insert-only access to the waitlist collection.
#[async_trait(?Send)]
pub trait WaitlistStore {
    /// Insert one record. Called exactly once per submission attempt.
    async fn insert(&self, lead: &LeadSubmission) -> Result<(), SubmissionError>;
}

// =============================================================================
// REST STORE
// =============================================================================

/// PostgREST-style endpoint: `POST {url}/rest/v1/{table}` with the project key.
pub struct RestStore {
    config: StoreConfig,
}

impl RestStore {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Request headers for an insert, in send order.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.config.api_key.clone()),
            ("Authorization", format!("Bearer {}", self.config.api_key)),
            ("Content-Type", "application/json".to_owned()),
            ("Prefer", "return=minimal".to_owned()),
        ]
    }
}

/// JSON body for one insert: an array holding the single record.
///
/// # Errors
///
/// Returns `SubmissionError::Encode` if serialization fails.
pub fn insert_body(lead: &LeadSubmission) -> Result<String, SubmissionError> {
    serde_json::to_string(&[lead]).map_err(|e| SubmissionError::Encode(e.to_string()))
}

#[async_trait(?Send)]
impl WaitlistStore for RestStore {
    async fn insert(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        #[cfg(feature = "hydrate")]
        {
            let body = insert_body(lead)?;
            let mut request = gloo_net::http::Request::post(&self.config.insert_url());
            for (name, value) in self.headers() {
                request = request.header(name, &value);
            }
            let resp = request
                .body(body)
                .map_err(|e| SubmissionError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmissionError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(SubmissionError::Rejected { status, body });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = lead;
            Err(SubmissionError::Network("not available on server".to_owned()))
        }
    }
}

// =============================================================================
// UNCONFIGURED STORE
// =============================================================================

/// Stand-in used when the build carries no endpoint; every insert fails.
pub struct UnconfiguredStore {
    reason: ConfigError,
}

impl UnconfiguredStore {
    #[must_use]
    pub fn new(reason: ConfigError) -> Self {
        Self { reason }
    }
}

#[async_trait(?Send)]
impl WaitlistStore for UnconfiguredStore {
    async fn insert(&self, _lead: &LeadSubmission) -> Result<(), SubmissionError> {
        Err(SubmissionError::NotConfigured(self.reason.to_string()))
    }
}

/// Store selected by the build-time configuration.
#[must_use]
pub fn store_from_build_env() -> Box<dyn WaitlistStore> {
    match StoreConfig::from_build_env() {
        Ok(config) => Box::new(RestStore::new(config)),
        Err(e) => {
            warn!("waitlist store disabled: {e}");
            Box::new(UnconfiguredStore::new(e))
        }
    }
}

// =============================================================================
// SUBMIT FLOW
// =============================================================================

/// Run one submission attempt for the form behind `form`.
///
/// Starts the submission (refused if the form is mid-flight, already
/// succeeded, or incomplete), performs exactly one insert, and applies the
/// outcome. Returns the resulting phase, or `None` when nothing was sent or
/// the form was disposed before the answer arrived.
pub async fn submit_draft<S, H>(store: &S, form: &H, plan_interest: &str) -> Option<FormPhase>
where
    S: WaitlistStore + ?Sized,
    H: FormHandle,
{
    let lead = match form.update_form(|f| f.begin_submit(plan_interest))? {
        Ok(lead) => lead,
        Err(reason) => {
            log!("waitlist submit skipped: {reason}");
            return None;
        }
    };

    let outcome = store.insert(&lead).await;
    match &outcome {
        Ok(()) => log!("waitlist lead saved (plan_interest={})", lead.plan_interest),
        Err(e) => error!("Error submitting to waitlist: {e}"),
    }

    form.update_form(|f| f.complete_submit(&outcome))
}

/// Close out a successful submission once `delay` has elapsed: reset the form
/// to an empty draft, then run `close`.
///
/// Returns `false`, skipping both steps, when the form was disposed while
/// waiting.
pub async fn finish_success<H, F>(form: &H, delay: impl Future<Output = ()>, close: F) -> bool
where
    H: FormHandle,
    F: FnOnce(),
{
    delay.await;
    if form.update_form(WaitlistForm::reset).is_none() {
        return false;
    }
    close();
    true
}
