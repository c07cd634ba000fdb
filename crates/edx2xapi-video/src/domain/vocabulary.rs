//! IRIs of the xAPI video profile used by the converters.

/// `initialized` verb.
pub const VERB_INITIALIZED: &str = "http://adlnet.gov/expapi/verbs/initialized";
/// `played` verb.
pub const VERB_PLAYED: &str = "https://w3id.org/xapi/video/verbs/played";
/// `paused` verb.
pub const VERB_PAUSED: &str = "https://w3id.org/xapi/video/verbs/paused";
/// `terminated` verb.
pub const VERB_TERMINATED: &str = "http://adlnet.gov/expapi/verbs/terminated";
/// `seeked` verb.
pub const VERB_SEEKED: &str = "https://w3id.org/xapi/video/verbs/seeked";

/// Activity type of a video.
pub const ACTIVITY_TYPE_VIDEO: &str = "https://w3id.org/xapi/video/activity-type/video";

/// Result extension: playback position in seconds.
pub const EXT_TIME: &str = "https://w3id.org/xapi/video/extensions/time";
/// Result extension: seek origin in seconds.
pub const EXT_TIME_FROM: &str = "https://w3id.org/xapi/video/extensions/time-from";
/// Result extension: seek target in seconds.
pub const EXT_TIME_TO: &str = "https://w3id.org/xapi/video/extensions/time-to";
/// Result extension: fraction of the video watched.
pub const EXT_PROGRESS: &str = "https://w3id.org/xapi/video/extensions/progress";

/// Context extension: video length in seconds.
pub const EXT_LENGTH: &str = "https://w3id.org/xapi/video/extensions/length";
/// Context extension: player session id.
pub const EXT_SESSION_ID: &str = "https://w3id.org/xapi/video/extensions/session-id";
/// Context extension: browser user agent.
pub const EXT_USER_AGENT: &str = "https://w3id.org/xapi/video/extensions/user-agent";

/// Video length reported in `length` extensions. Tracking-log events do not
/// carry the video duration.
pub const UNKNOWN_LENGTH: f64 = 0.0;

/// Progress reported when a video is terminated. Tracking-log events do not
/// carry watched ranges.
pub const UNKNOWN_PROGRESS: f64 = 0.0;
