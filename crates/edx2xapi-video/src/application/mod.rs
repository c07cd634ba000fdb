//! Video converters.

pub mod converters;
