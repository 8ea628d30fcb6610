//! Handler for `SBSNewsIntent`: picks a language and day, then plays the
//! matching on-demand bulletin.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{info, warn};

use super::response_builder::{build_audio_response, build_response, build_speechlet_response};
use crate::core::clock::Clock;
use crate::core::models::{AudioAction, Intent, ResponsePayload, SessionAttributes};
use crate::core::schedule::{DEFAULT_LANGUAGE, NewsSchedule};
use crate::errors::InvalidDateFormat;

pub const LANGUAGE_SLOT: &str = "Language";
pub const WHEN_SLOT: &str = "When";

const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_REPROMPT: &str = "Which day's news would you like to hear?";

/// What the news intent resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsSelection {
    Play {
        language: String,
        weekday: &'static str,
        audio_url: String,
    },
    UnsupportedLanguage(String),
    InvalidDate(InvalidDateFormat),
}

/// Trimmed, lower-cased `Language` slot, or the default bulletin language.
#[must_use]
pub fn resolve_language(intent: &Intent) -> String {
    intent
        .slot_value(LANGUAGE_SLOT)
        .map_or_else(|| DEFAULT_LANGUAGE.to_string(), |v| v.trim().to_lowercase())
}

/// Parse the trimmed `When` slot, falling back to today in the schedule's time zone.
///
/// # Errors
///
/// Returns `InvalidDateFormat` when the slot is present but not `YYYY-MM-DD`.
pub fn resolve_date(
    intent: &Intent,
    schedule: &NewsSchedule,
    clock: &dyn Clock,
) -> Result<NaiveDate, InvalidDateFormat> {
    match intent.slot_value(WHEN_SLOT) {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|_| InvalidDateFormat(raw.to_string())),
        None => Ok(clock.now().with_timezone(&schedule.time_zone()).date_naive()),
    }
}

/// Full English weekday name.
#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[must_use]
pub fn select_news(intent: &Intent, schedule: &NewsSchedule, clock: &dyn Clock) -> NewsSelection {
    let language = resolve_language(intent);

    let Some(hour_code) = schedule.hour_code(&language) else {
        return NewsSelection::UnsupportedLanguage(language);
    };

    let date = match resolve_date(intent, schedule, clock) {
        Ok(date) => date,
        Err(e) => return NewsSelection::InvalidDate(e),
    };

    let weekday = weekday_name(date);
    NewsSelection::Play {
        audio_url: schedule.audio_url(weekday, hour_code),
        language,
        weekday,
    }
}

#[must_use]
pub fn unsupported_language_speech(language: &str, schedule: &NewsSchedule) -> String {
    let mut speech = format!(
        "{language} is currently not supported. Currently supported languages are: "
    );
    for supported in schedule.languages() {
        speech.push_str(supported);
        speech.push_str(", ");
    }
    speech.push_str("Please try again.");
    speech
}

#[must_use]
pub fn invalid_date_speech(value: &str) -> String {
    format!("I couldn't understand the date {value}. Please ask for a day such as today or yesterday.")
}

/// Answer an `SBSNewsIntent`. Unsupported languages and unreadable dates keep the
/// session open so the user can ask again.
#[must_use]
pub fn play_sbs_news(intent: &Intent, schedule: &NewsSchedule, clock: &dyn Clock) -> ResponsePayload {
    let speechlet = match select_news(intent, schedule, clock) {
        NewsSelection::Play {
            language,
            weekday,
            audio_url,
        } => {
            info!(%language, weekday, %audio_url, "Playing SBS news bulletin");
            let speech = format!("Playing SBS {weekday} News in {language}");
            build_audio_response(
                &intent.name,
                &speech,
                None,
                true,
                AudioAction::Play,
                Some(&audio_url),
            )
        }
        NewsSelection::UnsupportedLanguage(language) => {
            warn!(%language, "Requested language is not supported");
            let speech = unsupported_language_speech(&language, schedule);
            build_speechlet_response(&intent.name, &speech, None, false)
        }
        NewsSelection::InvalidDate(InvalidDateFormat(value)) => {
            warn!(%value, "Could not parse When slot as a date");
            let speech = invalid_date_speech(&value);
            build_speechlet_response(&intent.name, &speech, Some(DATE_REPROMPT), false)
        }
    };

    build_response(SessionAttributes::new(), speechlet)
}
