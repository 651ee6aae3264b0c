//! Mapping from generated entities to Formbricks wire payloads.
//!
//! Formbricks localizes most display strings as `{"default": "..."}`
//! objects, and its management API only accepts the `multipleChoiceMulti`
//! question type for choice questions, with choices as `{id, label}`
//! objects. The functions here own those quirks so the client code stays a
//! plain HTTP adapter.

use demo_generator::{QuestionKind, Response, Survey, User};
use serde_json::{json, Value};

/// Localized string object as Formbricks expects it.
fn localized(text: &str) -> Value {
    json!({ "default": text })
}

/// Build the management-API payload for survey creation.
pub fn survey_payload(environment_id: &str, survey: &Survey) -> Value {
    let questions: Vec<Value> = survey
        .questions
        .iter()
        .map(|question| {
            let mut q = json!({
                "id": question.id,
                "headline": localized(&question.headline),
                "required": question.required,
                "isDraft": false,
                "logic": [],
            });

            match &question.kind {
                QuestionKind::Rating { range, labels } => {
                    q["type"] = json!("rating");
                    q["scale"] = json!("number");
                    q["range"] = json!(range);
                    q["labels"] = json!({
                        "left": localized(&labels.left),
                        "right": localized(&labels.right),
                        "center": localized(""),
                    });
                }
                QuestionKind::MultipleChoice { choices } => {
                    q["type"] = json!("multipleChoiceMulti");
                    q["choices"] = Value::Array(
                        choices
                            .iter()
                            .enumerate()
                            .map(|(i, choice)| {
                                json!({
                                    "id": format!("choice_{}", i + 1),
                                    "label": localized(choice),
                                })
                            })
                            .collect(),
                    );
                    q["multiSelect"] = json!(false);
                    q["shuffleOption"] = json!("none");
                }
                QuestionKind::OpenText { placeholder } => {
                    q["type"] = json!("openText");
                    q["placeholder"] = localized(placeholder);
                    q["longAnswer"] = json!(false);
                    q["inputType"] = json!("text");
                }
            }

            q
        })
        .collect();

    json!({
        "environmentId": environment_id,
        "name": survey.name,
        "type": survey.survey_type,
        "questions": questions,
        "welcomeCard": {
            "enabled": false,
            "headline": localized(""),
            "html": localized(""),
            "timeToFinish": false,
            "showResponseCount": false,
        },
        "thankYouCard": {
            "enabled": survey.thank_you_card.enabled,
            "headline": localized(&survey.thank_you_card.headline),
            "html": localized(&survey.thank_you_card.subheader),
            "showResponseCount": false,
        },
        "displayOption": "displayOnce",
        "recontactDays": 0,
        "status": survey.status,
    })
}

/// Build the client-API payload for response submission.
pub fn response_payload(server_survey_id: &str, response: &Response) -> Value {
    json!({
        "surveyId": server_survey_id,
        "finished": true,
        "ttc": response.ttc_seconds,
        "userId": response.user_id,
        "data": response.answers,
    })
}

/// Build the management-API payload for a user invitation.
pub fn invite_payload(user: &User) -> Value {
    json!({
        "name": user.name,
        "email": user.email,
        "role": user.role.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use demo_generator::{Question, RatingLabels, Role, ThankYouCard};
    use std::collections::BTreeMap;

    fn sample_survey() -> Survey {
        let now = Utc::now();
        Survey {
            id: "survey_1".to_string(),
            name: "Product Feedback Survey".to_string(),
            survey_type: "link".to_string(),
            status: "inProgress".to_string(),
            questions: vec![
                Question {
                    id: "q1".to_string(),
                    headline: "Rate the quality of our product".to_string(),
                    required: true,
                    kind: QuestionKind::Rating {
                        range: 7,
                        labels: RatingLabels {
                            left: "Poor".to_string(),
                            right: "Excellent".to_string(),
                        },
                    },
                },
                Question {
                    id: "q2".to_string(),
                    headline: "How did you hear about us?".to_string(),
                    required: false,
                    kind: QuestionKind::MultipleChoice {
                        choices: vec!["Social Media".to_string(), "Other".to_string()],
                    },
                },
                Question {
                    id: "q3".to_string(),
                    headline: "What can we improve?".to_string(),
                    required: false,
                    kind: QuestionKind::OpenText {
                        placeholder: "Your suggestions...".to_string(),
                    },
                },
            ],
            thank_you_card: ThankYouCard {
                enabled: true,
                headline: "Thank You!".to_string(),
                subheader: "Your feedback helps us improve.".to_string(),
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_survey_payload_localizes_headlines() {
        let payload = survey_payload("env_123", &sample_survey());

        assert_eq!(payload["environmentId"], "env_123");
        assert_eq!(
            payload["questions"][0]["headline"]["default"],
            "Rate the quality of our product"
        );
        assert_eq!(payload["thankYouCard"]["headline"]["default"], "Thank You!");
    }

    #[test]
    fn test_choice_questions_become_multiple_choice_multi() {
        let payload = survey_payload("env_123", &sample_survey());
        let q2 = &payload["questions"][1];

        assert_eq!(q2["type"], "multipleChoiceMulti");
        assert_eq!(q2["choices"][0]["id"], "choice_1");
        assert_eq!(q2["choices"][0]["label"]["default"], "Social Media");
        assert_eq!(q2["multiSelect"], false);
    }

    #[test]
    fn test_rating_question_fields() {
        let payload = survey_payload("env_123", &sample_survey());
        let q1 = &payload["questions"][0];

        assert_eq!(q1["type"], "rating");
        assert_eq!(q1["scale"], "number");
        assert_eq!(q1["range"], 7);
        assert_eq!(q1["labels"]["left"]["default"], "Poor");
    }

    #[test]
    fn test_open_text_question_fields() {
        let payload = survey_payload("env_123", &sample_survey());
        let q3 = &payload["questions"][2];

        assert_eq!(q3["type"], "openText");
        assert_eq!(q3["placeholder"]["default"], "Your suggestions...");
        assert_eq!(q3["inputType"], "text");
    }

    #[test]
    fn test_response_payload_uses_server_survey_id() {
        let response = Response {
            id: "response_1".to_string(),
            survey_id: "survey_1".to_string(),
            user_id: "user_3".to_string(),
            answers: BTreeMap::from([("q1".to_string(), "5".to_string())]),
            ttc_seconds: 42,
            created_at: Utc::now(),
        };

        let payload = response_payload("cm_srv_abc", &response);

        assert_eq!(payload["surveyId"], "cm_srv_abc");
        assert_eq!(payload["finished"], true);
        assert_eq!(payload["ttc"], 42);
        assert_eq!(payload["data"]["q1"], "5");
    }

    #[test]
    fn test_invite_payload_role_is_lowercase() {
        let user = User {
            id: "user_1".to_string(),
            name: "Alex Smith".to_string(),
            email: "alex.smith@techcorp.com".to_string(),
            role: Role::Manager,
            company: "TechCorp".to_string(),
            created_at: Utc::now(),
            last_login: Utc::now(),
        };

        let payload = invite_payload(&user);
        assert_eq!(payload["role"], "manager");
        assert_eq!(payload["email"], "alex.smith@techcorp.com");
    }
}
