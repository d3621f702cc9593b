//! Domain record for the todo endpoint.
//!
//! # Design
//! The field set matches the JSONPlaceholder todo shape exactly. Every field is
//! required and strictly typed; serde rejects a missing key or a type mismatch,
//! which the client reports as a decode failure. Unknown keys are ignored so
//! the server may add fields without breaking clients.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by `GET /todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_body() {
        let todo: Todo = serde_json::from_str(
            r#"{"userId":1,"id":1,"title":"delectus aut autem","completed":false}"#,
        )
        .unwrap();
        assert_eq!(
            todo,
            Todo {
                user_id: 1,
                id: 1,
                title: "delectus aut autem".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = serde_json::from_str::<Todo>(r#"{"userId":1,"id":1,"title":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("completed"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = serde_json::from_str::<Todo>(
            r#"{"userId":"1","id":1,"title":"x","completed":false}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let todo: Todo = serde_json::from_str(
            r#"{"userId":2,"id":7,"title":"t","completed":true,"priority":3}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 7);
        assert!(todo.completed);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let todo = Todo {
            user_id: 3,
            id: 4,
            title: "t".to_string(),
            completed: true,
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["userId"], 3);
        assert!(value.get("user_id").is_none());
    }
}
