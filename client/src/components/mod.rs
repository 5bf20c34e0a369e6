//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section components render static copy and raise `on_open` with their
//! call-to-action label; the page owns the capture modal and decides what
//! opening means. `waitlist_modal` is the only stateful component.

pub mod content;
pub mod final_cta;
pub mod hero;
pub mod nav;
pub mod pricing;
pub mod sections;
pub mod waitlist_modal;
