//! Demo dataset generator for the Formbricks CLI.
//!
//! This crate produces the in-memory dataset (surveys, users, responses)
//! that the `generate` command persists and the `seed` command pushes into
//! a running Formbricks instance. Generation is template-driven with a
//! seeded RNG, so the same seed and configuration reproduce the same
//! dataset.
//!
//! # Example
//!
//! ```rust
//! use demo_generator::{DemoGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let dataset = DemoGenerator::new(config).generate().unwrap();
//!
//! assert_eq!(dataset.surveys.len(), 5);
//! assert_eq!(dataset.users.len(), 10);
//! ```
//!
//! # Invariants
//!
//! - exactly `config.surveys` surveys, each with 3-5 questions
//! - exactly `config.users` users, the first `config.owners` of which are
//!   owners and the rest managers
//! - at least one response per survey, each answer matching its question's
//!   kind

pub mod error;
pub mod generator;
pub mod templates;
pub mod types;

pub use error::{DatasetError, GeneratorError};
pub use generator::{DemoGenerator, GeneratorConfig};
pub use types::{
    Dataset, Question, QuestionKind, RatingLabels, Response, Role, Survey, ThankYouCard, User,
};
