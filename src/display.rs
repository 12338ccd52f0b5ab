//! Reconciles a fetched playback payload against what is already shown.
//!
//! `DisplayState` is the only thing that survives between polls; it is owned
//! by the poll-handling task alone and is what makes diffing possible. The
//! display is always server truth: the percentage is recomputed from scratch
//! on every poll, never advanced locally.

use crate::api::PlaybackState;
use crate::timestamp::timestamp_seconds;

/// Shown when the payload carries no track at all.
pub const IDLE_TITLE: &str = "Nothing playing";

/// Last successfully rendered title and progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    title: String,
    percent: f64,
}

/// One render's worth of output, derived from a successful poll.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    pub class: &'static str,
    pub percent: f64,
    /// Whether the progress bar may animate smoothly into this value.
    /// False on a backward jump, so the bar snaps instead of rewinding.
    pub animate: bool,
    /// Cache-busted artwork URL, present only when the title changed.
    pub artwork: Option<String>,
}

fn progress_percent(state: &PlaybackState) -> f64 {
    let parse = |t: &Option<String>| t.as_deref().map(timestamp_seconds)?.ok();
    let percent = match (parse(&state.playback_pos), parse(&state.length)) {
        (Some(pos), Some(len)) => pos as f64 / len as f64 * 100.0,
        _ => f64::NAN,
    };
    // Unparseable timestamps and zero lengths render as an empty bar.
    if percent.is_finite() { percent } else { 0.0 }
}

fn render_title(state: &PlaybackState) -> String {
    if state.album.is_none() && state.title.is_none() && state.artist.is_none() {
        return IDLE_TITLE.to_string();
    }
    format!(
        "{} - \"{}\" by {}",
        state.album.as_deref().unwrap_or(""),
        state.title.as_deref().unwrap_or(""),
        state.artist.as_deref().unwrap_or("")
    )
}

impl DisplayState {
    /// Folds one successful poll into the display.
    ///
    /// `art_url` is the service's fixed artwork path and `now_ms` the
    /// cache-defeating value appended to it on a title change.
    pub fn apply(&mut self, state: &PlaybackState, art_url: &str, now_ms: u64) -> Frame {
        let percent = progress_percent(state);
        // A smaller value than last render means a seek, restart or track
        // change; animating would sweep the bar backwards.
        let animate = percent >= self.percent;
        self.percent = percent;

        let title = render_title(state);
        // Compare before overwriting; the other order never sees a change.
        let artwork = if title != self.title {
            Some(format!("{}?{}", art_url, now_ms))
        } else {
            None
        };
        self.title = title.clone();

        let class = if title == IDLE_TITLE { "idle" } else { "playing" };
        Frame { text: title, class, percent, animate, artwork }
    }
}
