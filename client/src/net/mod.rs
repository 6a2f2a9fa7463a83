//! Networking modules for the remote catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP request and `types` defines the wire schema plus
//! the view models pages render.

pub mod api;
pub mod types;
