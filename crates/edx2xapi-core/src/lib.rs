//! edx2xapi core, the conversion layer between edX tracking-log events and
//! xAPI statements.
//!
//! This crate defines the converter contract, the deterministic identity
//! scheme, the shared source-event and statement types, and the
//! orchestration entry points. It performs no I/O.

pub mod batch;
pub mod converter;
pub mod error;
pub mod fields;
pub mod identity;
pub mod orchestrator;
pub mod registry;
pub mod source;
pub mod statement;
