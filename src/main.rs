use anyhow::Context;
use log::{error, info};
use vacancy_stats::clients::{HeadHunterConfig, SuperJobConfig};
use vacancy_stats::config::LANGUAGES;
use vacancy_stats::{Config, HeadHunterClient, StatsPipeline, SuperJobClient, logger};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init("info");

    let config = Config::from_env()
        .inspect_err(|e| error!("{}", e))
        .context("failed to load configuration")?;

    let pipeline = StatsPipeline::new(LANGUAGES);

    let superjob = SuperJobClient::new(SuperJobConfig {
        base_url: config.superjob_base_url.clone(),
        app_key: config.superjob_app_key.clone(),
        request_delay: config.request_delay,
        ..Default::default()
    })?;
    pipeline
        .collect(&superjob, "SuperJob Moscow")
        .context("failed to collect SuperJob statistics")?
        .print();

    let headhunter = HeadHunterClient::new(HeadHunterConfig {
        base_url: config.hh_base_url.clone(),
        request_delay: config.request_delay,
        ..Default::default()
    })?;
    pipeline
        .collect(&headhunter, "HeadHunter Moscow")
        .context("failed to collect HeadHunter statistics")?
        .print();

    info!("done");
    Ok(())
}
