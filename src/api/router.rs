//! Event router: lifecycle hooks plus dispatch from request type and intent
//! name to the matching handler.

use tracing::{info, warn};

use crate::core::clock::Clock;
use crate::core::models::{
    IncomingEvent, Intent, KnownIntent, ResponsePayload, SkillRequest,
};
use crate::core::schedule::NewsSchedule;
use crate::errors::SkillError;
use crate::skill::{play_sbs_news, session_end_response, welcome_response};

/// The skill core. Holds only immutable data, so one instance serves every event.
pub struct Skill {
    schedule: NewsSchedule,
    clock: Box<dyn Clock>,
}

impl Skill {
    pub fn new(schedule: NewsSchedule, clock: impl Clock + 'static) -> Self {
        Self {
            schedule,
            clock: Box::new(clock),
        }
    }

    /// Route one event.
    ///
    /// `Ok(None)` means no reply is owed: the platform ended the session itself,
    /// or sent a request type this skill does not answer.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::UnrecognizedIntent` for an intent outside the known set.
    pub fn handle(&self, event: &IncomingEvent) -> Result<Option<ResponsePayload>, SkillError> {
        let session_id = event.session_id();

        if event.is_new_session() {
            on_session_started(event.request.request_id().unwrap_or_default(), session_id);
        }

        match &event.request {
            SkillRequest::LaunchRequest { request_id } => {
                Ok(Some(on_launch(request_id, session_id)))
            }
            SkillRequest::IntentRequest { request_id, intent } => {
                self.on_intent(request_id, intent, session_id).map(Some)
            }
            SkillRequest::SessionEndedRequest { request_id } => {
                on_session_ended(request_id, session_id);
                Ok(None)
            }
            SkillRequest::Unhandled => {
                warn!(session_id, "Ignoring unhandled request type");
                Ok(None)
            }
        }
    }

    fn on_intent(
        &self,
        request_id: &str,
        intent: &Intent,
        session_id: Option<&str>,
    ) -> Result<ResponsePayload, SkillError> {
        info!(
            request_id,
            session_id,
            intent = %intent.name,
            "on_intent"
        );

        #[cfg(feature = "debug-logs")]
        info!(
            "on_intent intent variable:\n{}",
            serde_json::to_string_pretty(intent).unwrap_or_default()
        );

        match KnownIntent::from_name(&intent.name) {
            Some(KnownIntent::SbsNews) => Ok(play_sbs_news(intent, &self.schedule, &*self.clock)),
            Some(KnownIntent::Help) => Ok(welcome_response()),
            Some(KnownIntent::Cancel | KnownIntent::Stop | KnownIntent::Pause) => {
                Ok(session_end_response())
            }
            None => Err(SkillError::UnrecognizedIntent(intent.name.clone())),
        }
    }
}

fn on_session_started(request_id: &str, session_id: Option<&str>) {
    info!(request_id, session_id, "on_session_started");
}

fn on_launch(request_id: &str, session_id: Option<&str>) -> ResponsePayload {
    info!(request_id, session_id, "on_launch");
    welcome_response()
}

fn on_session_ended(request_id: &str, session_id: Option<&str>) {
    info!(request_id, session_id, "on_session_ended");
}
