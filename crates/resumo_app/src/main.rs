mod platform;

use platform::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    app_logging::initialize(config.log_destination, config.log_level, &config.log_file);
    platform::run_app(config)
}
