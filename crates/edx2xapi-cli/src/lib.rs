//! edx2xapi command-line surface: configuration, the default converter
//! registry, and the line-oriented conversion pipeline.

pub mod config;
pub mod error;
pub mod pipeline;
