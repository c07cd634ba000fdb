//! edx2xapi navigation context.
//!
//! Browser `page_close` events and server request events, converted into
//! page `terminated` and `viewed` statements.

pub mod application;
pub mod domain;
