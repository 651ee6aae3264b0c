//! The seeding workflow itself.

use crate::report::{EntityKind, SeedReport};
use demo_generator::Dataset;
use formbricks_client::{ApiFailure, SurveyPlatform};
use std::collections::HashMap;
use tracing::{info, warn};

/// Seeds a generated dataset into a survey platform, one attempt per
/// entity, accumulating outcomes instead of aborting.
pub struct Seeder<'a, P: SurveyPlatform> {
    platform: &'a P,
}

impl<'a, P: SurveyPlatform> Seeder<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Run the full seeding pass: users, then surveys, then responses.
    ///
    /// Responses are only submitted for surveys the platform actually
    /// created; the generated survey id is mapped to the server-assigned
    /// id first. API failures never abort the run.
    pub async fn seed(&self, dataset: &Dataset) -> SeedReport {
        let mut report = SeedReport::new();

        self.seed_users(dataset, &mut report).await;
        let survey_ids = self.seed_surveys(dataset, &mut report).await;
        self.seed_responses(dataset, &survey_ids, &mut report).await;

        report.finish();
        report
    }

    async fn seed_users(&self, dataset: &Dataset, report: &mut SeedReport) {
        for user in &dataset.users {
            report.counts_mut(EntityKind::User).attempted += 1;

            match self.platform.invite_user(user).await {
                Ok(created) => {
                    report.counts_mut(EntityKind::User).created += 1;
                    info!("invited user {} ({})", user.email, created.generated_id);
                }
                Err(failure) => {
                    Self::record(report, EntityKind::User, &user.id, &failure);
                }
            }
        }
    }

    /// Create surveys and return the generated-id to server-id mapping for
    /// the ones that succeeded.
    async fn seed_surveys(
        &self,
        dataset: &Dataset,
        report: &mut SeedReport,
    ) -> HashMap<String, String> {
        let mut survey_ids = HashMap::new();

        for survey in &dataset.surveys {
            report.counts_mut(EntityKind::Survey).attempted += 1;

            match self.platform.create_survey(survey).await {
                Ok(created) => {
                    report.counts_mut(EntityKind::Survey).created += 1;
                    info!(
                        "created survey '{}': {} -> {}",
                        survey.name, created.generated_id, created.server_id
                    );
                    survey_ids.insert(created.generated_id, created.server_id);
                }
                Err(failure) => {
                    Self::record(report, EntityKind::Survey, &survey.id, &failure);
                }
            }
        }

        survey_ids
    }

    async fn seed_responses(
        &self,
        dataset: &Dataset,
        survey_ids: &HashMap<String, String>,
        report: &mut SeedReport,
    ) {
        for response in &dataset.responses {
            report.counts_mut(EntityKind::Response).attempted += 1;

            let Some(server_survey_id) = survey_ids.get(&response.survey_id) else {
                // The referenced survey never made it to the server; there
                // is nothing to submit against.
                warn!(
                    "response {}: survey {} was not created via the API, skipping submission",
                    response.id, response.survey_id
                );
                report.record_failure(
                    EntityKind::Response,
                    &response.id,
                    "not-found",
                    format!(
                        "survey {} was not created via the API",
                        response.survey_id
                    ),
                );
                continue;
            };

            match self
                .platform
                .submit_response(server_survey_id, response)
                .await
            {
                Ok(created) => {
                    report.counts_mut(EntityKind::Response).created += 1;
                    info!(
                        "submitted response {} to survey {server_survey_id}",
                        created.generated_id
                    );
                }
                Err(failure) => {
                    Self::record(report, EntityKind::Response, &response.id, &failure);
                }
            }
        }
    }

    fn record(report: &mut SeedReport, kind: EntityKind, entity_id: &str, failure: &ApiFailure) {
        warn!("{kind} {entity_id}: {}: {failure}", failure.classification());
        report.record_failure(kind, entity_id, failure.classification(), failure.to_string());
    }
}
