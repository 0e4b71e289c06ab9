//! Domain models for the Farm Advisory Dashboard

mod chat;
mod crop;
mod weather;

pub use chat::*;
pub use crop::*;
pub use weather::*;
