//! Navigation source events and the page vocabulary.

pub mod events;
pub mod vocabulary;
