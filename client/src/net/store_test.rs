use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use futures::future::ready;
use leptos::prelude::{GetUntracked, RwSignal};
use leptos::reactive::owner::Owner;

use super::*;
use crate::state::capture::CaptureModal;
use crate::state::form::SUBMISSION_ERROR_MESSAGE;
use crate::state::lead::{LeadDraft, LeadField};

/// Records every insert and answers from a script of outcomes.
#[derive(Default)]
struct RecordingStore {
    inserts: RefCell<Vec<LeadSubmission>>,
    fail_next: Cell<bool>,
}

#[async_trait(?Send)]
impl WaitlistStore for RecordingStore {
    async fn insert(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        self.inserts.borrow_mut().push(lead.clone());
        if self.fail_next.replace(false) {
            return Err(SubmissionError::Rejected { status: 503, body: "unavailable".to_owned() });
        }
        Ok(())
    }
}

fn ana_form() -> RefCell<WaitlistForm> {
    let mut form = WaitlistForm::default();
    form.update_field(LeadField::FullName, "Ana Ruiz");
    form.update_field(LeadField::Email, "ana@ejemplo.com");
    form.update_field(LeadField::Phone, "9511234567");
    form.update_field(LeadField::BusinessType, "Comercio Local");
    form.update_field(LeadField::EmployeesCount, "2-5");
    RefCell::new(form)
}

fn rest_store() -> RestStore {
    RestStore::new(StoreConfig::from_values(Some("https://abc.supabase.co"), Some("anon"), None).unwrap())
}

// =============================================================
// Request shape
// =============================================================

#[test]
fn insert_body_is_single_record_array() {
    let form = ana_form();
    let lead = LeadSubmission::from_draft(form.borrow().draft(), "Smart Ads + IA");
    let body: serde_json::Value = serde_json::from_str(&insert_body(&lead).unwrap()).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["plan_interest"], "Smart Ads + IA");
    assert_eq!(rows[0]["full_name"], "Ana Ruiz");
}

#[test]
fn rest_store_headers_carry_key_twice() {
    let headers = rest_store().headers();
    assert!(headers.contains(&("apikey", "anon".to_owned())));
    assert!(headers.contains(&("Authorization", "Bearer anon".to_owned())));
    assert!(headers.contains(&("Content-Type", "application/json".to_owned())));
    assert!(headers.contains(&("Prefer", "return=minimal".to_owned())));
}

#[test]
fn rest_store_targets_waitlist_collection() {
    assert_eq!(rest_store().config().insert_url(), "https://abc.supabase.co/rest/v1/waitlist");
}

#[test]
fn unconfigured_store_always_fails() {
    let store = UnconfiguredStore::new(ConfigError::Missing { var: "WAITLIST_STORE_URL" });
    let form = ana_form();
    let lead = LeadSubmission::from_draft(form.borrow().draft(), "General");
    let err = block_on(store.insert(&lead)).unwrap_err();
    assert!(matches!(err, SubmissionError::NotConfigured(ref m) if m.contains("WAITLIST_STORE_URL")));
}

// =============================================================
// submit_draft
// =============================================================

#[test]
fn submit_success_sends_one_record_and_succeeds() {
    let store = RecordingStore::default();
    let form = ana_form();

    let phase = block_on(submit_draft(&store, &form, "Smart Ads + IA"));

    assert_eq!(phase, Some(FormPhase::Succeeded));
    let inserts = store.inserts.borrow();
    assert_eq!(inserts.len(), 1);
    assert_eq!(
        inserts[0],
        LeadSubmission {
            business_type: "Comercio Local".to_owned(),
            employees_count: "2-5".to_owned(),
            full_name: "Ana Ruiz".to_owned(),
            email: "ana@ejemplo.com".to_owned(),
            phone: "9511234567".to_owned(),
            plan_interest: "Smart Ads + IA".to_owned(),
        }
    );
}

#[test]
fn submit_success_then_reset_leaves_empty_form() {
    let store = RecordingStore::default();
    let form = ana_form();
    block_on(submit_draft(&store, &form, "General"));
    form.borrow_mut().reset();
    assert_eq!(form.borrow().draft(), &LeadDraft::default());
    assert_eq!(form.borrow().phase(), FormPhase::Editing);
}

#[test]
fn submit_with_empty_field_makes_no_call() {
    let store = RecordingStore::default();
    let form = ana_form();
    form.borrow_mut().update_field(LeadField::Phone, "");

    let phase = block_on(submit_draft(&store, &form, "General"));

    assert_eq!(phase, None);
    assert!(store.inserts.borrow().is_empty());
    assert_eq!(form.borrow().phase(), FormPhase::Editing);
}

#[test]
fn submit_failure_keeps_fields_and_retry_sends_once_more() {
    let store = RecordingStore::default();
    store.fail_next.set(true);
    let form = ana_form();
    let before = form.borrow().draft().clone();

    let phase = block_on(submit_draft(&store, &form, "Starter Ads"));
    assert_eq!(phase, Some(FormPhase::Failed));
    assert_eq!(form.borrow().draft(), &before);
    assert_eq!(form.borrow().error_message(), Some(SUBMISSION_ERROR_MESSAGE));
    assert_eq!(store.inserts.borrow().len(), 1);

    let phase = block_on(submit_draft(&store, &form, "Starter Ads"));
    assert_eq!(phase, Some(FormPhase::Succeeded));
    assert_eq!(store.inserts.borrow().len(), 2);
}

#[test]
fn submit_while_in_flight_makes_no_second_call() {
    let store = RecordingStore::default();
    let form = ana_form();
    form.borrow_mut().begin_submit("General").unwrap();

    let phase = block_on(submit_draft(&store, &form, "General"));

    assert_eq!(phase, None);
    assert!(store.inserts.borrow().is_empty());
    assert!(form.borrow().is_submitting());
}

#[test]
fn submit_after_success_makes_no_call() {
    let store = RecordingStore::default();
    let form = ana_form();
    block_on(submit_draft(&store, &form, "General"));
    assert_eq!(block_on(submit_draft(&store, &form, "General")), None);
    assert_eq!(store.inserts.borrow().len(), 1);
}

#[test]
fn submit_against_unconfigured_store_fails_softly() {
    let store = UnconfiguredStore::new(ConfigError::Missing { var: "WAITLIST_STORE_KEY" });
    let form = ana_form();
    let phase = block_on(submit_draft(&store, &form, "General"));
    assert_eq!(phase, Some(FormPhase::Failed));
    assert!(form.borrow().phase().is_editable());
}

// =============================================================
// finish_success
// =============================================================

#[test]
fn success_delay_resets_draft_and_closes_modal() {
    let store = RecordingStore::default();
    let form = ana_form();
    let modal = RefCell::new(CaptureModal::default());
    modal.borrow_mut().open(Some("Smart Ads + IA"));

    assert_eq!(block_on(submit_draft(&store, &form, "Smart Ads + IA")), Some(FormPhase::Succeeded));
    let finished = block_on(finish_success(&form, ready(()), || modal.borrow_mut().close()));

    assert!(finished);
    assert!(!modal.borrow().visible);
    assert_eq!(form.borrow().draft(), &LeadDraft::default());
    assert_eq!(form.borrow().phase(), FormPhase::Editing);
}

#[test]
fn reopening_after_success_starts_from_empty_form() {
    let store = RecordingStore::default();
    let form = ana_form();
    let modal = RefCell::new(CaptureModal::default());
    modal.borrow_mut().open(Some("Hero Principal"));
    block_on(submit_draft(&store, &form, "Hero Principal"));
    block_on(finish_success(&form, ready(()), || modal.borrow_mut().close()));

    modal.borrow_mut().open(Some("Final CTA"));

    assert!(modal.borrow().visible);
    assert_eq!(modal.borrow().plan_interest, "Final CTA");
    assert_eq!(form.borrow().phase(), FormPhase::Editing);
    assert_eq!(form.borrow().draft(), &LeadDraft::default());
    assert_eq!(
        form.borrow_mut().begin_submit("Final CTA"),
        Err(crate::state::form::SubmitRejected::MissingField(LeadField::FullName))
    );
}

#[test]
fn finish_success_resets_live_signal() {
    let owner = Owner::new();
    let form = owner.with(|| RwSignal::new(ana_form().into_inner()));
    let closed = Cell::new(false);

    assert!(block_on(finish_success(&form, ready(()), || closed.set(true))));

    assert!(closed.get());
    assert_eq!(form.get_untracked(), WaitlistForm::default());
}

#[test]
fn finish_success_after_teardown_skips_reset_and_close() {
    let owner = Owner::new();
    let form = owner.with(|| RwSignal::new(WaitlistForm::default()));
    drop(owner);
    let closed = Cell::new(false);

    let finished = block_on(finish_success(&form, ready(()), || closed.set(true)));

    assert!(!finished);
    assert!(!closed.get());
    assert_eq!(form.update_form(WaitlistForm::reset), None);
}

#[test]
fn one_unconfigured_store_serves_repeated_submits() {
    let store: std::rc::Rc<dyn WaitlistStore> =
        std::rc::Rc::new(UnconfiguredStore::new(ConfigError::Missing { var: "WAITLIST_STORE_URL" }));
    let form = ana_form();

    assert_eq!(block_on(submit_draft(&*store.clone(), &form, "General")), Some(FormPhase::Failed));
    assert_eq!(block_on(submit_draft(&*store, &form, "General")), Some(FormPhase::Failed));
    assert_eq!(form.borrow().error_message(), Some(SUBMISSION_ERROR_MESSAGE));
}
