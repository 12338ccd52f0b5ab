//! Fixed-cadence polling of the player service.
//!
//! Every tick spawns an independent read; the scheduler never waits for the
//! previous response before firing the next request. Completions arrive on a
//! channel and are applied in completion order by the single task that owns
//! the `DisplayState`, so a slow early response can land after a faster later
//! one and briefly show stale data. That reordering window is accepted; a
//! failed poll changes nothing and the next successful one recovers.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;

use crate::api::{ApiClient, ApiError, PlaybackState};
use crate::config::Config;
use crate::display::{DisplayState, Frame};
use crate::output::print_frame;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Applies one poll outcome to the display. Failures are dropped without
/// touching the state; the stale line stands until the next good poll.
pub fn handle_poll(
    result: Result<PlaybackState, ApiError>,
    display: &mut DisplayState,
    art_url: &str,
) -> Option<Frame> {
    match result {
        Ok(state) => Some(display.apply(&state, art_url, now_ms())),
        Err(err) => {
            log::debug!("poll failed, keeping last display: {err}");
            None
        }
    }
}

/// Runs the poll loop until the process exits.
pub async fn run(client: ApiClient, config: &Config) -> anyhow::Result<()> {
    let client = Arc::new(client);
    let art_url = client.artwork_url();
    let (tx, mut rx) = mpsc::channel::<Result<PlaybackState, ApiError>>(8);

    let ticker_client = Arc::clone(&client);
    let interval = config.interval();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let client = Arc::clone(&ticker_client);
            let tx = tx.clone();
            // One detached request per tick; no cancellation, no dedup.
            tokio::spawn(async move {
                let _ = tx.send(client.now_playing().await).await;
            });
        }
    });

    let mut display = DisplayState::default();
    let mut last_output = String::new();
    while let Some(result) = rx.recv().await {
        if let Some(frame) = handle_poll(result, &mut display, &art_url) {
            print_frame(&frame, &mut last_output);
        }
    }
    Ok(())
}
