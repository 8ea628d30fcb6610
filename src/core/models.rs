//! Wire types for skill events and responses.
//!
//! Field names follow the platform's JSON contract exactly (camelCase), so
//! every struct here round-trips through `serde_json` without any manual mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Response envelope version expected by the platform.
pub const RESPONSE_VERSION: &str = "1.0";

/// Token attached to every audio stream we hand to the player.
pub const AUDIO_STREAM_TOKEN: &str = "this-is-the-audio-token";

/// Attributes carried between turns of a session. Always empty for this skill.
pub type SessionAttributes = Map<String, Value>;

// ============================================================================
// Incoming events
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingEvent {
    /// Absent on player notifications, which only carry `context`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<EventContext>,
    pub request: SkillRequest,
}

impl IncomingEvent {
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.session_id.as_str())
    }

    #[must_use]
    pub fn is_new_session(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_new)
    }

    /// Calling application, from the session or else from `context.System`.
    #[must_use]
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|s| &s.application)
            .or_else(|| self.context.as_ref().map(|c| &c.system.application))
            .map(|a| a.application_id.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventContext {
    #[serde(rename = "System")]
    pub system: SystemContext,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemContext {
    pub application: Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    #[serde(rename = "new", default)]
    pub is_new: bool,
    pub application: Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The request half of an event, tagged on its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SkillRequest {
    LaunchRequest { request_id: String },
    IntentRequest { request_id: String, intent: Intent },
    SessionEndedRequest { request_id: String },
    /// Player notifications and any other request type we never answer.
    #[serde(other)]
    Unhandled,
}

impl SkillRequest {
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::LaunchRequest { request_id }
            | Self::IntentRequest { request_id, .. }
            | Self::SessionEndedRequest { request_id } => Some(request_id),
            Self::Unhandled => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<HashMap<String, Slot>>,
}

impl Intent {
    /// Value of the named slot, if the slot was sent and carries a value.
    #[must_use]
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .as_ref()
            .and_then(|slots| slots.get(name))
            .and_then(|slot| slot.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Intents this skill knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownIntent {
    SbsNews,
    Help,
    Cancel,
    Stop,
    Pause,
}

impl KnownIntent {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SBSNewsIntent" => Some(Self::SbsNews),
            "AMAZON.HelpIntent" => Some(Self::Help),
            "AMAZON.CancelIntent" => Some(Self::Cancel),
            "AMAZON.StopIntent" => Some(Self::Stop),
            "AMAZON.PauseIntent" => Some(Self::Pause),
            _ => None,
        }
    }
}

// ============================================================================
// Outgoing responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<AudioDirective>>,
    pub should_end_session: bool,
}

/// Plain-text speech. `text` is `null` on the wire for an empty reprompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<String>,
}

impl OutputSpeech {
    #[must_use]
    pub fn plain_text(text: Option<&str>) -> Self {
        Self {
            kind: "PlainText".to_string(),
            text: text.map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioAction {
    #[serde(rename = "AudioPlayer.Play")]
    Play,
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDirective {
    #[serde(rename = "type")]
    pub action: AudioAction,
    pub play_behavior: String,
    pub audio_item: AudioItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioItem {
    pub stream: AudioStream,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStream {
    pub token: String,
    pub url: Option<String>,
    pub offset_in_milliseconds: u64,
}
