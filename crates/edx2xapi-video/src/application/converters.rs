//! Converters from edX video events to xAPI video profile statements.
//!
//! | event          | verb        | result                | context                         |
//! |----------------|-------------|-----------------------|---------------------------------|
//! | `load_video`   | initialized |                       | length, session-id, user-agent  |
//! | `play_video`   | played      | time                  | session-id                      |
//! | `pause_video`  | paused      | time                  | length, session-id              |
//! | `stop_video`   | terminated  | time, progress        | length, session-id              |
//! | `seek_video`   | seeked      | time-from, time-to    | session-id                      |

use edx2xapi_core::converter::{Converter, ConverterConfig};
use edx2xapi_core::error::ConversionError;
use edx2xapi_core::fields::{seconds, session_id, user_agent, video_activity_iri};
use edx2xapi_core::registry::ConverterRegistry;
use edx2xapi_core::source::BaseEdxEvent;
use edx2xapi_core::statement::{
    Activity, ActivityDefinition, EN_US, Statement, Verb, language_map,
};

use crate::domain::events::{
    LOAD_VIDEO_EVENT_TYPE, PAUSE_VIDEO_EVENT_TYPE, PLAY_VIDEO_EVENT_TYPE, SEEK_VIDEO_EVENT_TYPE,
    STOP_VIDEO_EVENT_TYPE, UiLoadVideo, UiPauseVideo, UiPlayVideo, UiSeekVideo, UiStopVideo,
};
use crate::domain::vocabulary::{
    ACTIVITY_TYPE_VIDEO, EXT_LENGTH, EXT_PROGRESS, EXT_SESSION_ID, EXT_TIME, EXT_TIME_FROM,
    EXT_TIME_TO, EXT_USER_AGENT, UNKNOWN_LENGTH, UNKNOWN_PROGRESS, VERB_INITIALIZED, VERB_PAUSED,
    VERB_PLAYED, VERB_SEEKED, VERB_TERMINATED,
};

/// Registers every video converter on `registry`.
#[must_use]
pub fn register(registry: ConverterRegistry, config: &ConverterConfig) -> ConverterRegistry {
    registry
        .register(
            LOAD_VIDEO_EVENT_TYPE,
            UiLoadVideoToVideoInitialized::new(config.clone()),
        )
        .register(
            PLAY_VIDEO_EVENT_TYPE,
            UiPlayVideoToVideoPlayed::new(config.clone()),
        )
        .register(
            PAUSE_VIDEO_EVENT_TYPE,
            UiPauseVideoToVideoPaused::new(config.clone()),
        )
        .register(
            STOP_VIDEO_EVENT_TYPE,
            UiStopVideoToVideoTerminated::new(config.clone()),
        )
        .register(
            SEEK_VIDEO_EVENT_TYPE,
            UiSeekVideoToVideoSeeked::new(config.clone()),
        )
}

fn video_object(config: &ConverterConfig, event: &BaseEdxEvent, block_id: &str) -> Activity {
    Activity {
        id: video_activity_iri(config.platform_url(), &event.context.course_id, block_id),
        definition: ActivityDefinition {
            activity_type: ACTIVITY_TYPE_VIDEO.to_owned(),
            name: language_map(EN_US, block_id),
        },
    }
}

/// Converts `load_video` into an `initialized` statement.
#[derive(Debug, Clone)]
pub struct UiLoadVideoToVideoInitialized {
    config: ConverterConfig,
}

impl UiLoadVideoToVideoInitialized {
    /// Creates the converter.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for UiLoadVideoToVideoInitialized {
    type Source = UiLoadVideo;

    fn name(&self) -> &'static str {
        "UiLoadVideoToVideoInitialized"
    }

    fn convert(
        &self,
        event: &UiLoadVideo,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        Ok(self
            .config
            .statement(&event.base, canonical_event)
            .context_extension(EXT_LENGTH, UNKNOWN_LENGTH)
            .context_extension(EXT_SESSION_ID, session_id(&event.base)?)
            .context_extension(EXT_USER_AGENT, user_agent(&event.base))
            .build(
                Verb::new(VERB_INITIALIZED, "initialized"),
                video_object(&self.config, &event.base, &event.event.id),
            ))
    }
}

/// Converts `play_video` into a `played` statement.
#[derive(Debug, Clone)]
pub struct UiPlayVideoToVideoPlayed {
    config: ConverterConfig,
}

impl UiPlayVideoToVideoPlayed {
    /// Creates the converter.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for UiPlayVideoToVideoPlayed {
    type Source = UiPlayVideo;

    fn name(&self) -> &'static str {
        "UiPlayVideoToVideoPlayed"
    }

    fn convert(
        &self,
        event: &UiPlayVideo,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        Ok(self
            .config
            .statement(&event.base, canonical_event)
            .result_extension(EXT_TIME, seconds("currentTime", event.event.current_time)?)
            .context_extension(EXT_SESSION_ID, session_id(&event.base)?)
            .build(
                Verb::new(VERB_PLAYED, "played"),
                video_object(&self.config, &event.base, &event.event.id),
            ))
    }
}

/// Converts `pause_video` into a `paused` statement.
#[derive(Debug, Clone)]
pub struct UiPauseVideoToVideoPaused {
    config: ConverterConfig,
}

impl UiPauseVideoToVideoPaused {
    /// Creates the converter.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for UiPauseVideoToVideoPaused {
    type Source = UiPauseVideo;

    fn name(&self) -> &'static str {
        "UiPauseVideoToVideoPaused"
    }

    fn convert(
        &self,
        event: &UiPauseVideo,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        Ok(self
            .config
            .statement(&event.base, canonical_event)
            .result_extension(EXT_TIME, seconds("currentTime", event.event.current_time)?)
            .context_extension(EXT_LENGTH, UNKNOWN_LENGTH)
            .context_extension(EXT_SESSION_ID, session_id(&event.base)?)
            .build(
                Verb::new(VERB_PAUSED, "paused"),
                video_object(&self.config, &event.base, &event.event.id),
            ))
    }
}

/// Converts `stop_video` into a `terminated` statement.
#[derive(Debug, Clone)]
pub struct UiStopVideoToVideoTerminated {
    config: ConverterConfig,
}

impl UiStopVideoToVideoTerminated {
    /// Creates the converter.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for UiStopVideoToVideoTerminated {
    type Source = UiStopVideo;

    fn name(&self) -> &'static str {
        "UiStopVideoToVideoTerminated"
    }

    fn convert(
        &self,
        event: &UiStopVideo,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        Ok(self
            .config
            .statement(&event.base, canonical_event)
            .result_extension(EXT_TIME, seconds("currentTime", event.event.current_time)?)
            .result_extension(EXT_PROGRESS, UNKNOWN_PROGRESS)
            .context_extension(EXT_LENGTH, UNKNOWN_LENGTH)
            .context_extension(EXT_SESSION_ID, session_id(&event.base)?)
            .build(
                Verb::new(VERB_TERMINATED, "terminated"),
                video_object(&self.config, &event.base, &event.event.id),
            ))
    }
}

/// Converts `seek_video` into a `seeked` statement.
#[derive(Debug, Clone)]
pub struct UiSeekVideoToVideoSeeked {
    config: ConverterConfig,
}

impl UiSeekVideoToVideoSeeked {
    /// Creates the converter.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for UiSeekVideoToVideoSeeked {
    type Source = UiSeekVideo;

    fn name(&self) -> &'static str {
        "UiSeekVideoToVideoSeeked"
    }

    fn convert(
        &self,
        event: &UiSeekVideo,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        Ok(self
            .config
            .statement(&event.base, canonical_event)
            .result_extension(EXT_TIME_FROM, seconds("old_time", event.event.old_time)?)
            .result_extension(EXT_TIME_TO, seconds("new_time", event.event.new_time)?)
            .context_extension(EXT_SESSION_ID, session_id(&event.base)?)
            .build(
                Verb::new(VERB_SEEKED, "seeked"),
                video_object(&self.config, &event.base, &event.event.id),
            ))
    }
}
