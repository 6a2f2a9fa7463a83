//! Plain view state shared by pages and components.

pub mod catalog;
pub mod session;
