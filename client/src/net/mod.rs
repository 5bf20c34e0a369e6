//! Networking for the waitlist store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the record sent to the hosted store, `store` the insert
//! client and the submit flow that feeds its outcome back into the form.

pub mod store;
pub mod types;
