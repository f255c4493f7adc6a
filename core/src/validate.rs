//! Field rules for candidate todos, shared by create and update.

use serde_json::Value;

use crate::error::ValidationError;
use crate::model::{NewTodo, TodoPayload};

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 5;

/// Check a candidate against the field rules in fixed order and return the
/// typed fields, or the first rule that failed.
///
/// Lengths are counted in characters after trimming surrounding whitespace.
/// The returned strings are the client's values as sent, untrimmed.
pub fn validate(payload: &TodoPayload) -> Result<NewTodo, ValidationError> {
    let title = text_at_least(payload.title.as_ref(), MIN_TITLE_CHARS)
        .ok_or(ValidationError::Title)?;
    let description = text_at_least(payload.description.as_ref(), MIN_DESCRIPTION_CHARS)
        .ok_or(ValidationError::Description)?;
    let is_completed = payload
        .is_completed
        .as_ref()
        .and_then(Value::as_bool)
        .ok_or(ValidationError::IsCompleted)?;

    Ok(NewTodo {
        title: title.to_string(),
        description: description.to_string(),
        is_completed,
    })
}

fn text_at_least(value: Option<&Value>, min_chars: usize) -> Option<&str> {
    let text = value?.as_str()?;
    (text.trim().chars().count() >= min_chars).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> TodoPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_a_complete_candidate() {
        let todo = validate(&payload(json!({
            "title": "Buy milk",
            "description": "2% milk, 1 gallon",
            "isCompleted": false
        })))
        .unwrap();
        assert_eq!(
            todo,
            NewTodo {
                title: "Buy milk".to_string(),
                description: "2% milk, 1 gallon".to_string(),
                is_completed: false,
            }
        );
    }

    #[test]
    fn keeps_surrounding_whitespace_in_stored_values() {
        let todo = validate(&payload(json!({
            "title": "  Buy milk ",
            "description": " fresh milk ",
            "isCompleted": true
        })))
        .unwrap();
        assert_eq!(todo.title, "  Buy milk ");
        assert_eq!(todo.description, " fresh milk ");
    }

    #[test]
    fn title_shorter_than_three_after_trim_is_rejected() {
        for title in [json!("ab"), json!("   ab   "), json!(""), json!("     ")] {
            let err = validate(&payload(json!({
                "title": title,
                "description": "long enough",
                "isCompleted": false
            })))
            .unwrap_err();
            assert_eq!(err, ValidationError::Title, "{title}");
        }
    }

    #[test]
    fn title_rule_wins_over_every_other_failure() {
        let err = validate(&payload(json!({ "title": 12345, "isCompleted": "nope" }))).unwrap_err();
        assert_eq!(err, ValidationError::Title);

        let err = validate(&TodoPayload::default()).unwrap_err();
        assert_eq!(err, ValidationError::Title);
    }

    #[test]
    fn description_must_be_text_of_five_characters() {
        for description in [json!(null), json!("four"), json!("  abcd  "), json!(["hello world"])] {
            let err = validate(&payload(json!({
                "title": "Title",
                "description": description,
                "isCompleted": false
            })))
            .unwrap_err();
            assert_eq!(err, ValidationError::Description, "{description}");
        }
    }

    #[test]
    fn is_completed_must_be_a_boolean() {
        for flag in [json!("true"), json!(1), json!(null)] {
            let err = validate(&payload(json!({
                "title": "Title",
                "description": "Description",
                "isCompleted": flag
            })))
            .unwrap_err();
            assert_eq!(err, ValidationError::IsCompleted, "{flag}");
        }

        let err = validate(&payload(json!({ "title": "Title", "description": "Description" })))
            .unwrap_err();
        assert_eq!(err, ValidationError::IsCompleted);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let todo = validate(&payload(json!({
            "title": "äöü",
            "description": "ñandú",
            "isCompleted": false
        })));
        assert!(todo.is_ok());
    }
}
