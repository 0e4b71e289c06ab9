//! Dashboard widgets

mod calendar;
mod chat;
mod crops;
mod weather;

pub use calendar::CalendarWidget;
pub use chat::ChatWidget;
pub use crops::CropGrid;
pub use weather::WeatherCard;
