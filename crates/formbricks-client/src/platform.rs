//! The trait seam between the seeder and the platform API.

use crate::error::ApiFailure;
use async_trait::async_trait;
use demo_generator::{Response, Survey, User};

/// Outcome of a successful survey creation.
#[derive(Debug, Clone)]
pub struct CreatedSurvey {
    /// The generated ("survey_N") id the survey was created from.
    pub generated_id: String,
    /// The server-assigned id to use for response submission.
    pub server_id: String,
}

/// Outcome of a successful response submission.
#[derive(Debug, Clone)]
pub struct CreatedResponse {
    pub generated_id: String,
    /// Server-assigned response id, when the API reports one.
    pub server_id: Option<String>,
}

/// Outcome of a successful user invitation.
#[derive(Debug, Clone)]
pub struct CreatedUser {
    pub generated_id: String,
    pub server_id: Option<String>,
}

/// Operations the seeder needs from a survey platform.
///
/// One HTTP call per operation; every failure comes back as a classified
/// [`ApiFailure`] rather than an unstructured error.
#[async_trait]
pub trait SurveyPlatform {
    /// Check that the platform answers at all (used by readiness polling
    /// and the seed preflight).
    async fn check_health(&self) -> Result<(), ApiFailure>;

    /// Invite a user into the platform organization.
    async fn invite_user(&self, user: &User) -> Result<CreatedUser, ApiFailure>;

    /// Create a survey and return its server-assigned id.
    async fn create_survey(&self, survey: &Survey) -> Result<CreatedSurvey, ApiFailure>;

    /// Submit a response against a survey previously created on the
    /// server. `server_survey_id` is the id returned by
    /// [`SurveyPlatform::create_survey`], not the generated one.
    async fn submit_response(
        &self,
        server_survey_id: &str,
        response: &Response,
    ) -> Result<CreatedResponse, ApiFailure>;
}
