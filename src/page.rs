//! Tribute page model: sections, content payloads, and the builder DSL.

pub mod dsl;
pub mod model;
