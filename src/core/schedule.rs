//! The SBS Radio 1 news schedule: which languages are broadcast, at which hour,
//! and where the on-demand recordings live.

use chrono_tz::Tz;

/// Host prefix for on-demand recordings.
pub const MEDIA_BASE_URL: &str = "https://media.sbs.com.au/ondemand/audio/";

/// Supported languages in announcement order, each with its two-digit broadcast hour.
pub const SBS_RADIO1_BULLETINS: [(&str, &str); 4] = [
    ("mandarin", "07"),
    ("english", "18"),
    ("vietnamese", "19"),
    ("korean", "21"),
];

/// Language used when the request does not name one.
pub const DEFAULT_LANGUAGE: &str = "mandarin";

/// Immutable schedule data, built once per process and shared by reference.
#[derive(Debug, Clone)]
pub struct NewsSchedule {
    bulletins: Vec<(String, String)>,
    time_zone: Tz,
    media_base_url: String,
}

impl NewsSchedule {
    #[must_use]
    pub fn sbs_radio1(time_zone: Tz) -> Self {
        Self {
            bulletins: SBS_RADIO1_BULLETINS
                .iter()
                .map(|(language, hour)| ((*language).to_string(), (*hour).to_string()))
                .collect(),
            time_zone,
            media_base_url: MEDIA_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Broadcast hour code for a lower-cased language name.
    #[must_use]
    pub fn hour_code(&self, language: &str) -> Option<&str> {
        self.bulletins
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, hour)| hour.as_str())
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.bulletins.iter().map(|(name, _)| name.as_str())
    }

    /// URL of the recorded bulletin for a weekday and hour. Nothing checks that it exists.
    #[must_use]
    pub fn audio_url(&self, weekday: &str, hour_code: &str) -> String {
        format!(
            "{}{}_ONDemand_SBS_RADIO1_{}_00.mp3",
            self.media_base_url, weekday, hour_code
        )
    }
}

impl Default for NewsSchedule {
    fn default() -> Self {
        Self::sbs_radio1(chrono_tz::Australia::Sydney)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_keep_declared_order() {
        let schedule = NewsSchedule::default();
        let languages: Vec<&str> = schedule.languages().collect();
        assert_eq!(languages, vec!["mandarin", "english", "vietnamese", "korean"]);
    }

    #[test]
    fn hour_codes_match_bulletins() {
        let schedule = NewsSchedule::default();
        assert_eq!(schedule.hour_code("mandarin"), Some("07"));
        assert_eq!(schedule.hour_code("korean"), Some("21"));
        assert_eq!(schedule.hour_code("Korean"), None);
        assert_eq!(schedule.hour_code("french"), None);
    }

    #[test]
    fn audio_url_is_plain_concatenation() {
        let schedule = NewsSchedule::default();
        assert_eq!(
            schedule.audio_url("Friday", "19"),
            "https://media.sbs.com.au/ondemand/audio/Friday_ONDemand_SBS_RADIO1_19_00.mp3"
        );
    }
}
