//! Video source events and the xAPI video profile vocabulary.

pub mod events;
pub mod vocabulary;
