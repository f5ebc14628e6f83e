//! Domain entities for shortened URLs and their click logs.

pub mod click;
pub mod entry;

pub use click::{ClickContext, ClickEvent};
pub use entry::UrlEntry;
