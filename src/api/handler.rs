//! Lambda binding - parses the raw platform event, checks the calling
//! application, and hands the event to the router.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::router::Skill;
use crate::core::config::AppConfig;
use crate::core::models::{IncomingEvent, ResponsePayload};
use crate::errors::SkillError;

pub use self::function_handler as handler;

/// Parse and route a raw event.
///
/// # Errors
///
/// Returns `InvalidEvent` for malformed JSON, `InvalidApplicationId` when the
/// event comes from an application other than the configured one (or names
/// none), and any routing error.
pub fn process_event(
    skill: &Skill,
    config: &AppConfig,
    payload: Value,
) -> Result<Option<ResponsePayload>, SkillError> {
    let event: IncomingEvent = serde_json::from_value(payload)?;

    let application_id = event.application_id();
    info!(application_id, "Received skill event");

    if let Some(expected) = &config.skill_application_id
        && application_id != Some(expected.as_str())
    {
        return Err(SkillError::InvalidApplicationId(
            application_id.unwrap_or("<missing>").to_string(),
        ));
    }

    skill.handle(&event)
}

/// Lambda handler for the skill entrypoint.
///
/// Returns `null` to the platform when no reply is owed.
///
/// # Errors
///
/// Any `SkillError` is logged and surfaced as a Lambda function error.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    skill: &Skill,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Option<ResponsePayload>, Error> {
    process_event(skill, config, event.payload).map_err(|e| {
        error!("Failed to handle skill event: {}", e);
        Error::from(e)
    })
}
