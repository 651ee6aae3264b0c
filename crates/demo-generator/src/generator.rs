//! Seeded demo data generator.

use crate::error::GeneratorError;
use crate::templates;
use crate::types::{
    Dataset, Question, QuestionKind, RatingLabels, Response, Role, Survey, ThankYouCard, User,
};
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Configuration for dataset generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of surveys to generate.
    pub surveys: usize,
    /// Number of users to generate.
    pub users: usize,
    /// How many of the generated users are owners; the rest are managers.
    pub owners: usize,
    /// RNG seed. Same seed and config reproduce the same dataset values.
    pub seed: u64,
    /// Upper bound on responses per survey (lower bound is always 1).
    pub max_responses_per_survey: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            surveys: 5,
            users: 10,
            owners: 2,
            seed: 42,
            max_responses_per_survey: 3,
        }
    }
}

impl GeneratorConfig {
    /// Validate the configuration before generation.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.surveys == 0 {
            return Err(GeneratorError::NoSurveys);
        }
        if self.users == 0 {
            return Err(GeneratorError::NoUsers);
        }
        if self.owners > self.users {
            return Err(GeneratorError::OwnersExceedUsers {
                owners: self.owners,
                users: self.users,
            });
        }
        if self.max_responses_per_survey == 0 {
            return Err(GeneratorError::NoResponses);
        }
        Ok(())
    }
}

/// Demo data generator backed by a seeded RNG.
///
/// Field values (names, emails, question mixes, answers) are driven by the
/// seed; timestamps are relative to the generation time.
pub struct DemoGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl DemoGenerator {
    /// Create a generator for the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Generate a complete dataset satisfying the structural invariants.
    pub fn generate(mut self) -> Result<Dataset, GeneratorError> {
        self.config.validate()?;

        let surveys = self.generate_surveys();
        let users = self.generate_users();
        let responses = self.generate_responses(&surveys, &users);

        Ok(Dataset {
            surveys,
            users,
            responses,
        })
    }

    fn generate_surveys(&mut self) -> Vec<Survey> {
        let now = Utc::now();
        let mut surveys = Vec::with_capacity(self.config.surveys);

        for i in 0..self.config.surveys {
            let base_name = templates::SURVEY_NAMES[i % templates::SURVEY_NAMES.len()];
            // Cycle template names with a suffix once they run out.
            let name = if i < templates::SURVEY_NAMES.len() {
                base_name.to_string()
            } else {
                format!("{} #{}", base_name, i / templates::SURVEY_NAMES.len() + 1)
            };

            let question_count = self.rng.gen_range(3..=5);
            let questions = (0..question_count)
                .map(|q| self.generate_question(q + 1))
                .collect();

            let (headline, subheader) = *templates::THANK_YOU_CARDS
                .choose(&mut self.rng)
                .expect("thank-you templates are non-empty");

            let created_at = now - Duration::days(self.rng.gen_range(1..=30));

            surveys.push(Survey {
                id: format!("survey_{}", i + 1),
                name,
                survey_type: "link".to_string(),
                status: "inProgress".to_string(),
                questions,
                thank_you_card: ThankYouCard {
                    enabled: true,
                    headline: headline.to_string(),
                    subheader: subheader.to_string(),
                },
                created_at,
                updated_at: now,
            });
        }

        surveys
    }

    fn generate_question(&mut self, index: usize) -> Question {
        // 40% rating, 30% multiple choice, 30% open text.
        let kind_roll = self.rng.gen_range(0..10);

        let (headline, required, kind) = if kind_roll < 4 {
            let (headline, range, left, right) = *templates::RATING_QUESTIONS
                .choose(&mut self.rng)
                .expect("rating templates are non-empty");
            (
                headline,
                true,
                QuestionKind::Rating {
                    range,
                    labels: RatingLabels {
                        left: left.to_string(),
                        right: right.to_string(),
                    },
                },
            )
        } else if kind_roll < 7 {
            let (headline, choices) = *templates::CHOICE_QUESTIONS
                .choose(&mut self.rng)
                .expect("choice templates are non-empty");
            (
                headline,
                false,
                QuestionKind::MultipleChoice {
                    choices: choices.iter().map(|c| c.to_string()).collect(),
                },
            )
        } else {
            let (headline, placeholder) = *templates::OPEN_QUESTIONS
                .choose(&mut self.rng)
                .expect("open-text templates are non-empty");
            (
                headline,
                false,
                QuestionKind::OpenText {
                    placeholder: placeholder.to_string(),
                },
            )
        };

        Question {
            id: format!("q{index}"),
            headline: headline.to_string(),
            required,
            kind,
        }
    }

    fn generate_users(&mut self) -> Vec<User> {
        let now = Utc::now();
        let mut users = Vec::with_capacity(self.config.users);

        for i in 0..self.config.users {
            let first = *templates::FIRST_NAMES
                .choose(&mut self.rng)
                .expect("first names are non-empty");
            let last = *templates::LAST_NAMES
                .choose(&mut self.rng)
                .expect("last names are non-empty");
            let company = *templates::COMPANIES
                .choose(&mut self.rng)
                .expect("companies are non-empty");
            let domain = *templates::EMAIL_DOMAINS
                .choose(&mut self.rng)
                .expect("domains are non-empty");

            // Fixed partition: the first `owners` users are owners.
            let role = if i < self.config.owners {
                Role::Owner
            } else {
                Role::Manager
            };

            users.push(User {
                id: format!("user_{}", i + 1),
                name: format!("{first} {last}"),
                email: format!(
                    "{}.{}@{}.{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    company.to_lowercase(),
                    domain
                ),
                role,
                company: company.to_string(),
                created_at: now - Duration::days(self.rng.gen_range(30..=365)),
                last_login: now - Duration::hours(self.rng.gen_range(1..=72)),
            });
        }

        users
    }

    fn generate_responses(&mut self, surveys: &[Survey], users: &[User]) -> Vec<Response> {
        let now = Utc::now();
        let mut responses = Vec::new();
        let mut response_id = 1;

        for survey in surveys {
            // At least one response per survey, from distinct users.
            let upper = self.config.max_responses_per_survey.min(users.len());
            let count = self.rng.gen_range(1..=upper);
            let respondents: Vec<&User> =
                users.choose_multiple(&mut self.rng, count).collect();

            for user in respondents {
                let answers = self.generate_answers(survey);

                responses.push(Response {
                    id: format!("response_{response_id}"),
                    survey_id: survey.id.clone(),
                    user_id: user.id.clone(),
                    answers,
                    ttc_seconds: self.rng.gen_range(30..=300),
                    created_at: now - Duration::hours(self.rng.gen_range(1..=168)),
                });
                response_id += 1;
            }
        }

        responses
    }

    fn generate_answers(&mut self, survey: &Survey) -> BTreeMap<String, String> {
        let mut answers = BTreeMap::new();

        for question in &survey.questions {
            let value = match &question.kind {
                QuestionKind::Rating { range, .. } => self.generate_rating(*range).to_string(),
                QuestionKind::MultipleChoice { choices } => choices
                    .choose(&mut self.rng)
                    .expect("choice questions always have choices")
                    .clone(),
                QuestionKind::OpenText { .. } => templates::OPEN_ANSWERS
                    .choose(&mut self.rng)
                    .expect("open answers are non-empty")
                    .to_string(),
            };
            answers.insert(question.id.clone(), value);
        }

        answers
    }

    /// Generate a rating, skewed optimistic on the common 5-point scale.
    fn generate_rating(&mut self, range: u8) -> u8 {
        if range == 5 {
            match self.rng.gen_range(0..100) {
                0..=4 => 1,
                5..=14 => 2,
                15..=34 => 3,
                35..=64 => 4,
                _ => 5,
            }
        } else {
            self.rng.gen_range(1..=range)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_counts() {
        let dataset = DemoGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap();

        assert_eq!(dataset.surveys.len(), 5);
        assert_eq!(dataset.users.len(), 10);
        assert_eq!(dataset.users_with_role(Role::Owner), 2);
        assert_eq!(dataset.users_with_role(Role::Manager), 8);
        dataset.verify().unwrap();
    }

    #[test]
    fn test_every_survey_has_a_response() {
        let dataset = DemoGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap();

        for survey in &dataset.surveys {
            assert!(dataset.responses_for(&survey.id) >= 1);
        }
    }

    #[test]
    fn test_question_counts_in_range() {
        let dataset = DemoGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap();

        for survey in &dataset.surveys {
            assert!((3..=5).contains(&survey.questions.len()));
        }
    }

    #[test]
    fn test_survey_names_cycle_past_templates() {
        let config = GeneratorConfig {
            surveys: 8,
            ..Default::default()
        };
        let dataset = DemoGenerator::new(config).generate().unwrap();

        assert_eq!(dataset.surveys.len(), 8);
        let names: std::collections::HashSet<&str> =
            dataset.surveys.iter().map(|s| s.name.as_str()).collect();
        // Cycled names get a suffix, so all 8 are distinct.
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = DemoGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap();
        let b = DemoGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap();

        let emails_a: Vec<&str> = a.users.iter().map(|u| u.email.as_str()).collect();
        let emails_b: Vec<&str> = b.users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails_a, emails_b);

        let questions_a: Vec<&Question> =
            a.surveys.iter().flat_map(|s| s.questions.iter()).collect();
        let questions_b: Vec<&Question> =
            b.surveys.iter().flat_map(|s| s.questions.iter()).collect();
        assert_eq!(questions_a, questions_b);
    }

    #[test]
    fn test_different_seeds_same_shape() {
        let a = DemoGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap();
        let b = DemoGenerator::new(GeneratorConfig {
            seed: 7,
            ..Default::default()
        })
        .generate()
        .unwrap();

        assert_eq!(a.surveys.len(), b.surveys.len());
        assert_eq!(a.users.len(), b.users.len());
        assert_eq!(
            a.users_with_role(Role::Owner),
            b.users_with_role(Role::Owner)
        );
        b.verify().unwrap();
    }

    #[test]
    fn test_answers_match_question_kinds() {
        let dataset = DemoGenerator::new(GeneratorConfig::default())
            .generate()
            .unwrap();

        for response in &dataset.responses {
            let survey = dataset
                .surveys
                .iter()
                .find(|s| s.id == response.survey_id)
                .unwrap();

            for question in &survey.questions {
                let answer = &response.answers[&question.id];
                match &question.kind {
                    QuestionKind::Rating { range, .. } => {
                        let value: u8 = answer.parse().expect("rating answers are numeric");
                        assert!((1..=*range).contains(&value));
                    }
                    QuestionKind::MultipleChoice { choices } => {
                        assert!(choices.contains(answer));
                    }
                    QuestionKind::OpenText { .. } => {
                        assert!(!answer.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_owners_exceeding_users_rejected() {
        let config = GeneratorConfig {
            users: 2,
            owners: 3,
            ..Default::default()
        };
        assert!(matches!(
            DemoGenerator::new(config).generate(),
            Err(GeneratorError::OwnersExceedUsers { .. })
        ));
    }

    #[test]
    fn test_zero_surveys_rejected() {
        let config = GeneratorConfig {
            surveys: 0,
            ..Default::default()
        };
        assert!(matches!(
            DemoGenerator::new(config).generate(),
            Err(GeneratorError::NoSurveys)
        ));
    }

    #[test]
    fn test_custom_role_ratio() {
        let config = GeneratorConfig {
            users: 6,
            owners: 3,
            ..Default::default()
        };
        let dataset = DemoGenerator::new(config).generate().unwrap();

        assert_eq!(dataset.users_with_role(Role::Owner), 3);
        assert_eq!(dataset.users_with_role(Role::Manager), 3);
    }
}
