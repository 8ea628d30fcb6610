//! SBS Radio - a voice-assistant skill that plays SBS Radio 1 news bulletins on demand.
//!
//! The crate turns one platform event (launch, intent, or session end) into one
//! speechlet response, optionally carrying an audio player directive that streams
//! the recorded bulletin for the requested language and day.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) as the event-delivery binding
//! - serde for the platform's JSON event and response shapes
//! - chrono / chrono-tz to resolve "today" in the broadcaster's time zone
//! - tracing for structured lifecycle logging
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use sbs_radio::api::Skill;
//! use sbs_radio::core::clock::FixedClock;
//! use sbs_radio::core::models::IncomingEvent;
//! use sbs_radio::core::schedule::NewsSchedule;
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap());
//! let skill = Skill::new(NewsSchedule::default(), clock);
//!
//! let event: IncomingEvent = serde_json::from_value(serde_json::json!({
//!     "session": {
//!         "sessionId": "SessionId.example",
//!         "new": true,
//!         "application": { "applicationId": "amzn1.ask.skill.example" }
//!     },
//!     "request": {
//!         "type": "IntentRequest",
//!         "requestId": "EdwRequestId.example",
//!         "intent": {
//!             "name": "SBSNewsIntent",
//!             "slots": { "Language": { "name": "Language", "value": "English" } }
//!         }
//!     }
//! }))
//! .unwrap();
//!
//! let payload = skill.handle(&event).unwrap().expect("intent requests get a reply");
//! assert!(payload.response.should_end_session);
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod skill;

pub use errors::SkillError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at cold start.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// sbs_radio::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
