//! Live page state and the pure per-frame evaluator.

pub mod evaluator;
