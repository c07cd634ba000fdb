//! edx2xapi video context.
//!
//! Typed edX video player events (`load_video`, `play_video`, `pause_video`,
//! `stop_video`, `seek_video`) and their converters onto the xAPI video
//! profile.

pub mod application;
pub mod domain;
