//! Best-effort API seeding workflow.
//!
//! The seeder takes a generated dataset and a [`SurveyPlatform`]
//! implementation and attempts to create every entity on the platform:
//! users first, then surveys, then responses (responses reference surveys,
//! so they need the server-assigned survey ids). Each entity gets exactly
//! one attempt; a classified failure is logged and recorded, and the run
//! continues. The seeder itself never fails on API errors: the outcome of
//! a run is always a [`SeedReport`].
//!
//! [`SurveyPlatform`]: formbricks_client::SurveyPlatform

pub mod report;
pub mod seeder;

pub use report::{Counts, EntityKind, FailureRecord, ReportError, SeedReport};
pub use seeder::Seeder;
