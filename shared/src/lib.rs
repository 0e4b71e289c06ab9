//! Shared types and logic for the Farm Advisory Dashboard
//!
//! This crate contains types shared between the backend and the browser
//! frontend, plus the pure client-side logic (catalog search, chat
//! transcript) that is unit-tested outside the browser.

pub mod models;
pub mod search;
pub mod transcript;

pub use models::*;
pub use search::*;
pub use transcript::*;
