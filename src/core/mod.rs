//! Configuration, wire models, and the immutable news schedule

pub mod clock;
pub mod config;
pub mod models;
pub mod schedule;
