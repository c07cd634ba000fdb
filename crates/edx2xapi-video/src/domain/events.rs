//! Source events emitted by the edX video player.

use edx2xapi_core::source::{BaseEdxEvent, SourceEvent, json_or_string};
use serde::{Deserialize, Serialize};

/// Event type identifier for [`UiLoadVideo`].
pub const LOAD_VIDEO_EVENT_TYPE: &str = "load_video";

/// Event type identifier for [`UiPlayVideo`].
pub const PLAY_VIDEO_EVENT_TYPE: &str = "play_video";

/// Event type identifier for [`UiPauseVideo`].
pub const PAUSE_VIDEO_EVENT_TYPE: &str = "pause_video";

/// Event type identifier for [`UiStopVideo`].
pub const STOP_VIDEO_EVENT_TYPE: &str = "stop_video";

/// Event type identifier for [`UiSeekVideo`].
pub const SEEK_VIDEO_EVENT_TYPE: &str = "seek_video";

/// Payload identifying the video block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoBlock {
    /// Player flavour (`html5`, `mobile`, or a YouTube id).
    #[serde(default)]
    pub code: String,
    /// Video block id.
    pub id: String,
}

/// Payload of events reporting the playback position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPosition {
    /// Player flavour.
    #[serde(default)]
    pub code: String,
    /// Video block id.
    pub id: String,
    /// Playback position in seconds.
    #[serde(rename = "currentTime")]
    pub current_time: f64,
}

/// Payload of `seek_video`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSeek {
    /// Player flavour.
    #[serde(default)]
    pub code: String,
    /// Video block id.
    pub id: String,
    /// Position before the seek, in seconds.
    pub old_time: f64,
    /// Position after the seek, in seconds.
    pub new_time: f64,
    /// How the seek was performed (`onSlideSeek`, `onSkipSeek`...).
    #[serde(default, rename = "type")]
    pub seek_type: String,
}

/// The player finished loading a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiLoadVideo {
    /// Common tracking-log fields.
    #[serde(flatten)]
    pub base: BaseEdxEvent,
    /// Browser event name.
    #[serde(default)]
    pub name: String,
    /// Event payload.
    #[serde(deserialize_with = "json_or_string")]
    pub event: VideoBlock,
}

/// The learner started or resumed playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPlayVideo {
    /// Common tracking-log fields.
    #[serde(flatten)]
    pub base: BaseEdxEvent,
    /// Browser event name.
    #[serde(default)]
    pub name: String,
    /// Event payload.
    #[serde(deserialize_with = "json_or_string")]
    pub event: VideoPosition,
}

/// The learner paused playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPauseVideo {
    /// Common tracking-log fields.
    #[serde(flatten)]
    pub base: BaseEdxEvent,
    /// Browser event name.
    #[serde(default)]
    pub name: String,
    /// Event payload.
    #[serde(deserialize_with = "json_or_string")]
    pub event: VideoPosition,
}

/// Playback stopped, either at the end of the video or by the learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiStopVideo {
    /// Common tracking-log fields.
    #[serde(flatten)]
    pub base: BaseEdxEvent,
    /// Browser event name.
    #[serde(default)]
    pub name: String,
    /// Event payload.
    #[serde(deserialize_with = "json_or_string")]
    pub event: VideoPosition,
}

/// The learner moved the playback position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSeekVideo {
    /// Common tracking-log fields.
    #[serde(flatten)]
    pub base: BaseEdxEvent,
    /// Browser event name.
    #[serde(default)]
    pub name: String,
    /// Event payload.
    #[serde(deserialize_with = "json_or_string")]
    pub event: VideoSeek,
}

impl SourceEvent for UiLoadVideo {
    fn base(&self) -> &BaseEdxEvent {
        &self.base
    }
}

impl SourceEvent for UiPlayVideo {
    fn base(&self) -> &BaseEdxEvent {
        &self.base
    }
}

impl SourceEvent for UiPauseVideo {
    fn base(&self) -> &BaseEdxEvent {
        &self.base
    }
}

impl SourceEvent for UiStopVideo {
    fn base(&self) -> &BaseEdxEvent {
        &self.base
    }
}

impl SourceEvent for UiSeekVideo {
    fn base(&self) -> &BaseEdxEvent {
        &self.base
    }
}
