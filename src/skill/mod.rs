//! Skill behaviour: response shapes and the per-intent handlers

pub mod handlers;
pub mod news;
pub mod response_builder;

pub use handlers::{session_end_response, welcome_response};
pub use news::play_sbs_news;
