//! Shared test fixtures for the edx2xapi converters.

mod events;

pub use events::{
    AGENT, BLOCK_ID, COURSE_ID, EventFixture, PLATFORM_URL, PLAY_VIDEO_CANONICAL,
    PLAY_VIDEO_STATEMENT_ID, SESSION, TIME, USER_ID, UUID_NAMESPACE, base_event, load_video_event,
    page_close_event, pause_video_event, play_video_event, seek_video_event, server_event,
    stop_video_event,
};
