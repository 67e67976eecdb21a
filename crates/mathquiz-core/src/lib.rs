//! mathquiz-core — Question generation, scoring, and reporting.
//!
//! This crate holds the arithmetic quiz engine: the configuration resolver,
//! the random question generator, streak statistics, and the results report.
//! The `mathquiz` binary wires it to a terminal.

pub mod console;
pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod report;
pub mod resolver;
pub mod settings;
pub mod statistics;
pub mod traits;

pub use error::QuizError;
