//! Tracking-log event fixtures.
//!
//! Every fixture comes with the exact string it serializes to, which is what
//! statement ids are derived from.

use serde_json::{Value, json};

/// Namespace used across converter tests.
pub const UUID_NAMESPACE: &str = "ee241f8b-174f-5bdb-bae9-c09de5fe017f";

/// Platform base URL used across converter tests.
pub const PLATFORM_URL: &str = "https://x.test";

/// Session key carried by browser fixtures.
pub const SESSION: &str = "11111111-1111-1111-1111-111111111111";

/// User id carried by every fixture.
pub const USER_ID: &str = "1";

/// Course key carried by every fixture.
pub const COURSE_ID: &str = "org+course+run";

/// Video block id carried by video fixtures.
pub const BLOCK_ID: &str = "abc123";

/// Timestamp carried by every fixture.
pub const TIME: &str = "2021-01-01T00:00:00+00:00";

/// User agent carried by every fixture.
pub const AGENT: &str = "Mozilla/5.0";

/// A hand-written `play_video` event, as it would arrive on the wire.
pub const PLAY_VIDEO_CANONICAL: &str = r#"{"username":"","ip":"","agent":"Mozilla/5.0","host":"","referer":"","accept_language":"","context":{"course_id":"","org_id":"","user_id":"1","path":"/event"},"time":"2021-01-01T00:00:00+00:00","page":null,"session":"11111111-1111-1111-1111-111111111111","event_source":"browser","name":"play_video","event_type":"play_video","event":{"code":"html5","id":"abc123","currentTime":12.5}}"#;

/// Version 5 id of [`PLAY_VIDEO_CANONICAL`] under [`UUID_NAMESPACE`].
pub const PLAY_VIDEO_STATEMENT_ID: &str = "81bd203d-876c-5259-addf-6d40ffcabef8";

/// A raw event together with its canonical serialization.
#[derive(Debug, Clone)]
pub struct EventFixture {
    /// The parsed event.
    pub value: Value,
    /// The exact string `value` was serialized to.
    pub raw: String,
}

impl EventFixture {
    /// Wraps `value`, serializing it compactly.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be serialized.
    #[must_use]
    pub fn new(value: Value) -> Self {
        let raw = serde_json::to_string(&value).expect("fixture serialization is infallible");
        Self { value, raw }
    }
}

/// Builds the fields every tracking-log event shares.
#[must_use]
pub fn base_event(event_type: &str, event_source: &str) -> Value {
    json!({
        "username": "learner",
        "ip": "127.0.0.1",
        "agent": AGENT,
        "host": "x.test",
        "referer": "https://x.test/courses",
        "accept_language": "en-US,en;q=0.9",
        "context": {
            "course_id": COURSE_ID,
            "org_id": "org",
            "user_id": USER_ID,
            "path": "/event"
        },
        "time": TIME,
        "page": null,
        "session": SESSION,
        "event_source": event_source,
        "event_type": event_type
    })
}

fn browser_event(event_type: &str, event: Value) -> EventFixture {
    let mut value = base_event(event_type, "browser");
    value["name"] = json!(event_type);
    value["page"] = json!("https://x.test/courses/course-v1:org+course+run/courseware");
    value["event"] = event;
    EventFixture::new(value)
}

/// A `load_video` event.
#[must_use]
pub fn load_video_event() -> EventFixture {
    browser_event("load_video", json!({"code": "html5", "id": BLOCK_ID}))
}

/// A `play_video` event at `current_time` seconds.
#[must_use]
pub fn play_video_event(current_time: f64) -> EventFixture {
    browser_event(
        "play_video",
        json!({"code": "html5", "id": BLOCK_ID, "currentTime": current_time}),
    )
}

/// A `pause_video` event at `current_time` seconds.
#[must_use]
pub fn pause_video_event(current_time: f64) -> EventFixture {
    browser_event(
        "pause_video",
        json!({"code": "html5", "id": BLOCK_ID, "currentTime": current_time}),
    )
}

/// A `stop_video` event at `current_time` seconds.
#[must_use]
pub fn stop_video_event(current_time: f64) -> EventFixture {
    browser_event(
        "stop_video",
        json!({"code": "html5", "id": BLOCK_ID, "currentTime": current_time}),
    )
}

/// A `seek_video` event from `old_time` to `new_time` seconds.
#[must_use]
pub fn seek_video_event(old_time: f64, new_time: f64) -> EventFixture {
    browser_event(
        "seek_video",
        json!({
            "code": "html5",
            "id": BLOCK_ID,
            "old_time": old_time,
            "new_time": new_time,
            "type": "onSlideSeek"
        }),
    )
}

/// A `page_close` event for `page`.
#[must_use]
pub fn page_close_event(page: &str) -> EventFixture {
    let mut value = base_event("page_close", "browser");
    value["name"] = json!("page_close");
    value["page"] = json!(page);
    value["event"] = json!("");
    EventFixture::new(value)
}

/// A server event for a request to `path`.
#[must_use]
pub fn server_event(path: &str) -> EventFixture {
    let mut value = base_event(path, "server");
    value["context"]["path"] = json!(path);
    value["session"] = json!("");
    value["event"] = json!({"GET": {}, "POST": {}});
    EventFixture::new(value)
}
