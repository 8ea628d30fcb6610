//! Builders for the two speechlet response shapes.
//!
//! Every response carries a plain-text speech block, a simple card mirroring the
//! speech, and a reprompt. Audio responses additionally carry one player directive.

use crate::core::models::{
    AUDIO_STREAM_TOKEN, AudioAction, AudioDirective, AudioItem, AudioStream, Card, OutputSpeech,
    RESPONSE_VERSION, Reprompt, ResponsePayload, SessionAttributes, SpeechletResponse,
};

const CARD_PREFIX: &str = "SessionSpeechlet - ";

/// Build a speech-only response.
///
/// # Examples
///
/// ```
/// use sbs_radio::skill::response_builder::build_speechlet_response;
///
/// let speechlet = build_speechlet_response("Welcome", "Hello", Some("Say something"), false);
/// assert_eq!(speechlet.card.title, "SessionSpeechlet - Welcome");
/// assert!(speechlet.directives.is_none());
/// ```
#[must_use]
pub fn build_speechlet_response(
    title: &str,
    output: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
) -> SpeechletResponse {
    SpeechletResponse {
        output_speech: OutputSpeech::plain_text(Some(output)),
        card: Card {
            kind: "Simple".to_string(),
            title: format!("{CARD_PREFIX}{title}"),
            content: format!("{CARD_PREFIX}{output}"),
        },
        reprompt: Reprompt {
            output_speech: OutputSpeech::plain_text(reprompt_text),
        },
        directives: None,
        should_end_session,
    }
}

/// Build a response that also tells the audio player to play or stop a stream.
#[must_use]
pub fn build_audio_response(
    title: &str,
    output: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
    action: AudioAction,
    audio_url: Option<&str>,
) -> SpeechletResponse {
    let directive = AudioDirective {
        action,
        play_behavior: "REPLACE_ALL".to_string(),
        audio_item: AudioItem {
            stream: AudioStream {
                token: AUDIO_STREAM_TOKEN.to_string(),
                url: audio_url.map(ToString::to_string),
                offset_in_milliseconds: 0,
            },
        },
    };

    SpeechletResponse {
        directives: Some(vec![directive]),
        ..build_speechlet_response(title, output, reprompt_text, should_end_session)
    }
}

/// Wrap a speechlet in the versioned envelope.
#[must_use]
pub fn build_response(
    session_attributes: SessionAttributes,
    speechlet_response: SpeechletResponse,
) -> ResponsePayload {
    ResponsePayload {
        version: RESPONSE_VERSION.to_string(),
        session_attributes,
        response: speechlet_response,
    }
}
