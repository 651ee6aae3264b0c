//! Entity types for the generated demo dataset.
//!
//! These are the on-disk shapes written by the `generate` command. The wire
//! payloads sent to Formbricks are derived from these in the client crate;
//! nothing here depends on the HTTP layer.

use crate::error::DatasetError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A generated survey. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Generated identifier ("survey_1", "survey_2", ...).
    pub id: String,
    /// Survey display name.
    pub name: String,
    /// Formbricks survey type (always "link" for generated surveys).
    #[serde(rename = "type")]
    pub survey_type: String,
    /// Survey status as Formbricks expects it ("inProgress").
    pub status: String,
    /// Questions, ids "q1".."qN".
    pub questions: Vec<Question>,
    /// Thank-you card shown after completion.
    pub thank_you_card: ThankYouCard,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single survey question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier, unique within the survey ("q1", "q2", ...).
    pub id: String,
    /// Question text.
    pub headline: String,
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Question kind with its type-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    /// Numeric rating on a 1..=range scale.
    #[serde(rename = "rating")]
    Rating { range: u8, labels: RatingLabels },
    /// Single selection from a fixed choice list.
    #[serde(rename = "multipleChoice")]
    MultipleChoice { choices: Vec<String> },
    /// Free-form text answer.
    #[serde(rename = "openText")]
    OpenText { placeholder: String },
}

/// Endpoint labels for a rating scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingLabels {
    pub left: String,
    pub right: String,
}

/// Thank-you card shown after a survey is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThankYouCard {
    pub enabled: bool,
    pub headline: String,
    pub subheader: String,
}

/// Access level of a generated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Manager,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

/// A generated platform user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier ("user_1", "user_2", ...).
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// A generated response to one survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Generated identifier ("response_1", "response_2", ...).
    pub id: String,
    /// Generated id of the survey this response answers.
    pub survey_id: String,
    /// Generated id of the responding user.
    pub user_id: String,
    /// Answer values keyed by question id, aligned to the survey's
    /// question kinds.
    pub answers: BTreeMap<String, String>,
    /// Time to complete, in seconds.
    pub ttc_seconds: u32,
    pub created_at: DateTime<Utc>,
}

/// The complete generated dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub surveys: Vec<Survey>,
    pub users: Vec<User>,
    pub responses: Vec<Response>,
}

const SURVEYS_FILE: &str = "surveys.json";
const USERS_FILE: &str = "users.json";
const RESPONSES_FILE: &str = "responses.json";

impl Dataset {
    /// Persist the dataset as three JSON files under `dir`.
    ///
    /// The directory is created if it does not exist. Files are written
    /// pretty-printed so they stay usable for manual import when API
    /// seeding is blocked.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<(), DatasetError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        std::fs::write(
            dir.join(SURVEYS_FILE),
            serde_json::to_string_pretty(&self.surveys)?,
        )?;
        std::fs::write(
            dir.join(USERS_FILE),
            serde_json::to_string_pretty(&self.users)?,
        )?;
        std::fs::write(
            dir.join(RESPONSES_FILE),
            serde_json::to_string_pretty(&self.responses)?,
        )?;

        Ok(())
    }

    /// Load a dataset previously written by [`Dataset::save`].
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();

        let surveys = serde_json::from_str(&std::fs::read_to_string(dir.join(SURVEYS_FILE))?)?;
        let users = serde_json::from_str(&std::fs::read_to_string(dir.join(USERS_FILE))?)?;
        let responses = serde_json::from_str(&std::fs::read_to_string(dir.join(RESPONSES_FILE))?)?;

        Ok(Self {
            surveys,
            users,
            responses,
        })
    }

    /// Number of responses referencing the given generated survey id.
    pub fn responses_for(&self, survey_id: &str) -> usize {
        self.responses
            .iter()
            .filter(|r| r.survey_id == survey_id)
            .count()
    }

    /// Number of users with the given role.
    pub fn users_with_role(&self, role: Role) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }

    /// Check the structural invariants of a generated dataset.
    ///
    /// - at least one survey, each with at least one question
    /// - at least one response per survey
    /// - every response references an existing survey and user, and
    ///   answers exactly that survey's questions
    pub fn verify(&self) -> Result<(), DatasetError> {
        if self.surveys.is_empty() {
            return Err(DatasetError::Invariant("no surveys".into()));
        }

        for survey in &self.surveys {
            if survey.questions.is_empty() {
                return Err(DatasetError::Invariant(format!(
                    "survey {} has no questions",
                    survey.id
                )));
            }
            if self.responses_for(&survey.id) == 0 {
                return Err(DatasetError::Invariant(format!(
                    "survey {} has no responses",
                    survey.id
                )));
            }
        }

        for response in &self.responses {
            let survey = self
                .surveys
                .iter()
                .find(|s| s.id == response.survey_id)
                .ok_or_else(|| {
                    DatasetError::Invariant(format!(
                        "response {} references unknown survey {}",
                        response.id, response.survey_id
                    ))
                })?;

            if !self.users.iter().any(|u| u.id == response.user_id) {
                return Err(DatasetError::Invariant(format!(
                    "response {} references unknown user {}",
                    response.id, response.user_id
                )));
            }

            for question in &survey.questions {
                if !response.answers.contains_key(&question.id) {
                    return Err(DatasetError::Invariant(format!(
                        "response {} is missing an answer for {}",
                        response.id, question.id
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let now = Utc::now();
        let survey = Survey {
            id: "survey_1".to_string(),
            name: "Customer Satisfaction Survey".to_string(),
            survey_type: "link".to_string(),
            status: "inProgress".to_string(),
            questions: vec![Question {
                id: "q1".to_string(),
                headline: "How satisfied are you?".to_string(),
                required: true,
                kind: QuestionKind::Rating {
                    range: 5,
                    labels: RatingLabels {
                        left: "Very Dissatisfied".to_string(),
                        right: "Very Satisfied".to_string(),
                    },
                },
            }],
            thank_you_card: ThankYouCard {
                enabled: true,
                headline: "Thank You!".to_string(),
                subheader: "Your feedback helps us improve.".to_string(),
            },
            created_at: now,
            updated_at: now,
        };
        let user = User {
            id: "user_1".to_string(),
            name: "Alex Smith".to_string(),
            email: "alex.smith@techcorp.com".to_string(),
            role: Role::Owner,
            company: "TechCorp".to_string(),
            created_at: now,
            last_login: now,
        };
        let response = Response {
            id: "response_1".to_string(),
            survey_id: "survey_1".to_string(),
            user_id: "user_1".to_string(),
            answers: BTreeMap::from([("q1".to_string(), "4".to_string())]),
            ttc_seconds: 45,
            created_at: now,
        };
        Dataset {
            surveys: vec![survey],
            users: vec![user],
            responses: vec![response],
        }
    }

    #[test]
    fn test_verify_accepts_consistent_dataset() {
        sample_dataset().verify().expect("dataset should verify");
    }

    #[test]
    fn test_verify_rejects_survey_without_responses() {
        let mut dataset = sample_dataset();
        dataset.responses.clear();
        assert!(dataset.verify().is_err());
    }

    #[test]
    fn test_verify_rejects_dangling_survey_reference() {
        let mut dataset = sample_dataset();
        dataset.responses[0].survey_id = "survey_99".to_string();
        assert!(dataset.verify().is_err());
    }

    #[test]
    fn test_verify_rejects_missing_answer() {
        let mut dataset = sample_dataset();
        dataset.responses[0].answers.clear();
        assert!(dataset.verify().is_err());
    }

    #[test]
    fn test_question_kind_serializes_with_type_tag() {
        let question = Question {
            id: "q1".to_string(),
            headline: "Which features do you use?".to_string(),
            required: false,
            kind: QuestionKind::MultipleChoice {
                choices: vec!["Feature A".to_string(), "Feature B".to_string()],
            },
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "multipleChoice");
        assert_eq!(json["choices"][0], "Feature A");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = sample_dataset();

        dataset.save(dir.path()).unwrap();
        let loaded = Dataset::load(dir.path()).unwrap();

        assert_eq!(dataset, loaded);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Owner).unwrap(), "owner");
        assert_eq!(serde_json::to_value(Role::Manager).unwrap(), "manager");
    }
}
