//! Navigation converters.

pub mod converters;
