//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog cards and page chrome while reading/writing
//! shared state from Leptos context providers or signals passed as props.

pub mod pager;
pub mod session_bar;
pub mod system_card;
