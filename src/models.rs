//! Frontend Models
//!
//! Data structures matching the `/todos` resource.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned todo identifier
///
/// Opaque to the client. Servers emit it either as a JSON string or a number,
/// both are kept as their text form, which doubles as the DOM element id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = TodoId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer todo id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TodoId, E> {
                Ok(TodoId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TodoId, E> {
                Ok(TodoId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TodoId, E> {
                Ok(TodoId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Todo data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
}

/// Create payload, the server assigns the id
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string_or_number() {
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[{"id":"a1","content":"Buy milk"},{"id":42,"content":"Walk dog"}]"#,
        )
        .unwrap();

        assert_eq!(todos[0].id, TodoId::from("a1"));
        assert_eq!(todos[1].id, TodoId::from("42"));
        assert_eq!(todos[1].id.to_string(), "42");
    }

    #[test]
    fn test_id_rejects_other_json() {
        let parsed: Result<Todo, _> = serde_json::from_str(r#"{"id":true,"content":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_new_todo_has_no_id() {
        let body = serde_json::to_value(NewTodo { content: "" }).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "" }));
    }
}
