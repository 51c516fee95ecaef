//! Translation of loosely-typed "common value" JSON records into
//! strongly-typed measurement values bound to the page under test.

pub mod cmd;
pub mod config;
pub mod logs;
pub mod story;
pub mod value;

pub fn run_app(config_path: &str, input_path: &str) -> anyhow::Result<()> {
    let config = config::Config::load(config_path)?;
    logs::init(&config.system.log_level)?;
    tracing::debug!("config: {:?}", config);

    cmd::translate::run(&config, input_path)?;
    Ok(())
}
