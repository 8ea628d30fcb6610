use chrono::{TimeZone, Utc};
use lambda_runtime::{Context, LambdaEvent};
use sbs_radio::SkillError;
use sbs_radio::api::Skill;
use sbs_radio::api::handler::{function_handler, process_event};
use sbs_radio::core::clock::FixedClock;
use sbs_radio::core::config::AppConfig;
use sbs_radio::core::schedule::NewsSchedule;
use serde_json::{Value, json};

const APP_ID: &str = "amzn1.ask.skill.9d43b814-44eb-4ff5-af92-942d369dfca9";

fn skill() -> Skill {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 3, 23, 0, 0).unwrap());
    Skill::new(NewsSchedule::default(), clock)
}

fn launch_from(application_id: &str) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "SessionId.handler",
            "application": { "applicationId": application_id },
            "user": { "userId": "amzn1.ask.account.test" }
        },
        "request": {
            "type": "LaunchRequest",
            "requestId": "EdwRequestId.handler",
            "timestamp": "2024-03-04T10:00:00Z",
            "locale": "en-AU"
        }
    })
}

fn config_for(application_id: Option<&str>) -> AppConfig {
    AppConfig {
        skill_application_id: application_id.map(ToString::to_string),
        ..AppConfig::default()
    }
}

#[test]
fn accepts_any_application_when_unconfigured() {
    let payload = process_event(&skill(), &config_for(None), launch_from("amzn1.ask.skill.any"))
        .unwrap()
        .unwrap();
    assert!(!payload.response.should_end_session);
}

#[test]
fn accepts_matching_application() {
    let payload = process_event(&skill(), &config_for(Some(APP_ID)), launch_from(APP_ID)).unwrap();
    assert!(payload.is_some());
}

#[test]
fn rejects_foreign_application() {
    let result = process_event(
        &skill(),
        &config_for(Some(APP_ID)),
        launch_from("amzn1.ask.skill.someone-else"),
    );
    assert!(matches!(result, Err(SkillError::InvalidApplicationId(_))));
}

fn playback_started_from(application_id: &str) -> Value {
    json!({
        "version": "1.0",
        "context": {
            "System": {
                "application": { "applicationId": application_id },
                "user": { "userId": "amzn1.ask.account.test" }
            },
            "AudioPlayer": {
                "token": "this-is-the-audio-token",
                "offsetInMilliseconds": 0,
                "playerActivity": "PLAYING"
            }
        },
        "request": {
            "type": "AudioPlayer.PlaybackStarted",
            "requestId": "r-playback",
            "timestamp": "2024-03-04T10:00:05Z",
            "token": "this-is-the-audio-token",
            "offsetInMilliseconds": 0
        }
    })
}

#[test]
fn sessionless_player_event_gets_no_reply() {
    let result = process_event(&skill(), &config_for(None), playback_started_from(APP_ID));
    assert!(matches!(result, Ok(None)), "got {result:?}");
}

#[test]
fn sessionless_player_event_checks_context_application() {
    let accepted = process_event(
        &skill(),
        &config_for(Some(APP_ID)),
        playback_started_from(APP_ID),
    );
    assert!(matches!(accepted, Ok(None)), "got {accepted:?}");

    let rejected = process_event(
        &skill(),
        &config_for(Some(APP_ID)),
        playback_started_from("amzn1.ask.skill.someone-else"),
    );
    assert!(matches!(rejected, Err(SkillError::InvalidApplicationId(_))));
}

#[test]
fn event_without_any_application_fails_a_configured_check() {
    let bare = json!({
        "request": { "type": "AudioPlayer.PlaybackNearlyFinished", "requestId": "r-bare" }
    });
    let result = process_event(&skill(), &config_for(Some(APP_ID)), bare);
    assert!(matches!(result, Err(SkillError::InvalidApplicationId(_))));
}

#[test]
fn rejects_malformed_event() {
    let result = process_event(&skill(), &config_for(None), json!({ "request": {} }));
    assert!(matches!(result, Err(SkillError::InvalidEvent(_))));
}

#[test]
fn config_reads_lookup_values() {
    let config = AppConfig::from_lookup(|key| match key {
        "SKILL_APPLICATION_ID" => Some(APP_ID.to_string()),
        "NEWS_TIME_ZONE" => Some("Australia/Perth".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.skill_application_id.as_deref(), Some(APP_ID));
    assert_eq!(config.time_zone, chrono_tz::Australia::Perth);

    let defaults = AppConfig::from_lookup(|_| None).unwrap();
    assert_eq!(defaults.skill_application_id, None);
    assert_eq!(defaults.time_zone, chrono_tz::Australia::Sydney);
}

#[test]
fn config_rejects_unknown_time_zone() {
    let result = AppConfig::from_lookup(|key| {
        (key == "NEWS_TIME_ZONE").then(|| "Mars/Olympus_Mons".to_string())
    });
    assert!(matches!(result, Err(SkillError::Config(_))));
}

#[tokio::test]
async fn lambda_handler_serializes_null_for_session_end() {
    let skill = skill();
    let config = config_for(None);
    let event = json!({
        "session": {
            "new": false,
            "sessionId": "SessionId.handler",
            "application": { "applicationId": APP_ID }
        },
        "request": { "type": "SessionEndedRequest", "requestId": "r-end", "reason": "EXCEEDED_MAX_REPROMPTS" }
    });

    let response = function_handler(&skill, &config, LambdaEvent::new(event, Context::default()))
        .await
        .unwrap();
    assert_eq!(serde_json::to_value(response).unwrap(), Value::Null);
}

#[tokio::test]
async fn lambda_handler_surfaces_unknown_intent_as_error() {
    let skill = skill();
    let config = config_for(None);
    let event = json!({
        "session": {
            "new": false,
            "sessionId": "SessionId.handler",
            "application": { "applicationId": APP_ID }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "r-unknown",
            "intent": { "name": "WeatherIntent" }
        }
    });

    let result = function_handler(&skill, &config, LambdaEvent::new(event, Context::default())).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("WeatherIntent"));
}
