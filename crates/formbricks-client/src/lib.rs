//! HTTP adapter for the Formbricks management and client APIs.
//!
//! Every operation takes a generated entity, makes exactly one HTTP call,
//! and returns either a success value (carrying any server-assigned id) or
//! an [`ApiFailure`] from a closed classification. Nothing else crosses the
//! crate boundary: reqwest errors and non-2xx statuses are all converted,
//! so callers can apply a uniform accumulate-and-continue policy.
//!
//! The [`SurveyPlatform`] trait is the seam the seeder is written against;
//! [`FormbricksClient`] is the real implementation.

pub mod client;
pub mod error;
pub mod payload;
pub mod platform;

pub use client::{ClientConfig, FormbricksClient};
pub use error::ApiFailure;
pub use platform::{CreatedResponse, CreatedSurvey, CreatedUser, SurveyPlatform};
