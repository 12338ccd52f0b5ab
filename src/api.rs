//! HTTP client for the player service.
//!
//! Two request shapes exist: reads (GET, decoded JSON payload) and mutates
//! (PATCH, response body ignored). There is no retry, no timeout and no
//! deduplication; when the poll cadence outpaces a round trip, several reads
//! may be in flight at once.

use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Request semantics understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Read,
    Mutate,
}

/// Transport actions the widget can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ControlAction {
    /// Skip to the previous track
    Prev,
    /// Skip to the next track
    Next,
    /// Start playback
    Play,
    /// Pause playback
    Pause,
    /// Toggle between playing and paused
    PlayPause,
}

impl ControlAction {
    pub fn path(self) -> &'static str {
        match self {
            ControlAction::Prev => "/player/prev.json",
            ControlAction::Next => "/player/next.json",
            ControlAction::Play => "/player/play.json",
            ControlAction::Pause => "/player/pause.json",
            ControlAction::PlayPause => "/player/play_pause.json",
        }
    }
}

/// One poll's worth of playback state. Every field may be absent when
/// nothing is playing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackState {
    pub album: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Elapsed time as unnormalized `[H:]MM:SS` text.
    pub playback_pos: Option<String>,
    /// Track length in the same textual form.
    pub length: Option<String>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The always-current album artwork resource. The path never changes
    /// across tracks, so consumers must append a cache-defeating query.
    pub fn artwork_url(&self) -> String {
        format!("{}/player/album_cover.jpg", self.base)
    }

    /// Issues a labeled request and decodes the body on a 2xx completion.
    /// Any other outcome is an [`ApiError`]; the caller decides whether to
    /// drop it.
    pub async fn issue<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let request = match method {
            Method::Read => self.http.get(&url),
            Method::Mutate => self.http.patch(&url),
        };
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        // A malformed body decodes to a transport-equivalent failure.
        Ok(response.json().await?)
    }

    pub async fn now_playing(&self) -> Result<PlaybackState, ApiError> {
        self.issue(Method::Read, "/player/now_playing.json").await
    }

    /// Fire-and-forget: the next poll is how the result becomes visible.
    pub async fn control(&self, action: ControlAction) -> Result<(), ApiError> {
        let _: serde_json::Value = self.issue(Method::Mutate, action.path()).await?;
        Ok(())
    }
}
