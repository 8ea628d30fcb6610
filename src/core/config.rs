use chrono_tz::Tz;
use std::env;

use crate::errors::SkillError;

/// Time zone the broadcast schedule follows when no date is requested.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Australia::Sydney;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// When set, events from any other skill application are rejected.
    pub skill_application_id: Option<String>,
    pub time_zone: Tz,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SkillError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests never touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SkillError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let skill_application_id = lookup("SKILL_APPLICATION_ID").filter(|id| !id.is_empty());

        let time_zone = match lookup("NEWS_TIME_ZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| SkillError::Config(format!("NEWS_TIME_ZONE: {}", e)))?,
            None => DEFAULT_TIME_ZONE,
        };

        Ok(Self {
            skill_application_id,
            time_zone,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            skill_application_id: None,
            time_zone: DEFAULT_TIME_ZONE,
        }
    }
}
