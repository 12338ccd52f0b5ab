mod api;
mod config;
mod display;
mod output;
mod poll;
mod timestamp;

use anyhow::Result;

use api::ApiClient;
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let client = ApiClient::new(&config.url);

    // One-shot transport command: issue it and exit. The next poll of a
    // running widget is how the effect becomes visible.
    if let Some(action) = config.action {
        if let Err(err) = client.control(action).await {
            log::debug!("control {action:?} dropped: {err}");
        }
        return Ok(());
    }

    log::info!(
        "polling {} every {}ms",
        config.url,
        config.interval_ms
    );
    poll::run(client, &config).await
}
