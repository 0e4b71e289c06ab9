//! HTTP handlers for the Farm Advisory Dashboard

pub mod chat;
pub mod crops;
pub mod health;
pub mod weather;

pub use chat::*;
pub use crops::*;
pub use health::*;
pub use weather::*;
