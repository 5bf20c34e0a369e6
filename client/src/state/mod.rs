//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern: `capture` is the page-level modal trigger,
//! `lead` the draft and its field enumerations, `form` the submission
//! lifecycle. All three are plain data so they test without a browser.

pub mod capture;
pub mod form;
pub mod lead;
