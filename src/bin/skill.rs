// Lambda bootstrap entry point for the SBS radio skill

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use once_cell::sync::OnceCell;
use sbs_radio::api::{Skill, handler};
use sbs_radio::core::clock::SystemClock;
use sbs_radio::core::config::AppConfig;
use sbs_radio::core::schedule::NewsSchedule;
use serde_json::Value;
use tracing::{error, info};

static CONFIG: OnceCell<AppConfig> = OnceCell::new();
static SKILL: OnceCell<Skill> = OnceCell::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    sbs_radio::setup_logging();

    let config = CONFIG.get_or_try_init(AppConfig::from_env).map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let skill =
        SKILL.get_or_init(|| Skill::new(NewsSchedule::sbs_radio1(config.time_zone), SystemClock));

    info!(
        time_zone = %config.time_zone,
        application_check = config.skill_application_id.is_some(),
        "Skill initialised"
    );

    run(service_fn(move |event: LambdaEvent<Value>| {
        handler(skill, config, event)
    }))
    .await
}
