//! Fixed responses for launching, help, and leaving the skill.

use super::response_builder::{build_audio_response, build_response, build_speechlet_response};
use crate::core::models::{AudioAction, ResponsePayload, SessionAttributes};

pub const WELCOME_SPEECH: &str = "Welcome to Alexa SBS Skill. \
    You can start by saying, today's news in Mandarin, or yesterday's news in English.";

pub const WELCOME_REPROMPT: &str = "Please tell me what you want to hear by saying, \
    today's news in Mandarin, or yesterday's news in English.";

pub const FAREWELL_SPEECH: &str = "Thank you for trying the SBS Alexa Skills. Have a nice day! ";

/// Greeting used for launch and help. Keeps the session open.
#[must_use]
pub fn welcome_response() -> ResponsePayload {
    build_response(
        SessionAttributes::new(),
        build_speechlet_response("Welcome", WELCOME_SPEECH, Some(WELCOME_REPROMPT), false),
    )
}

/// Farewell for cancel, stop, and pause. Stops playback and ends the session.
#[must_use]
pub fn session_end_response() -> ResponsePayload {
    build_response(
        SessionAttributes::new(),
        build_audio_response(
            "Session Ended",
            FAREWELL_SPEECH,
            None,
            true,
            AudioAction::Stop,
            None,
        ),
    )
}
