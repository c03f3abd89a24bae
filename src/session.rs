use serde::{Deserialize, Serialize};

use crate::catalog::find_example;

/// Per-session UI selections. Owned by the presentation layer and passed by
/// reference into the action handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub sql_input: String,

    #[serde(default)]
    pub example_choice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(sql: impl Into<String>) -> Self {
        Self {
            sql_input: sql.into(),
            example_choice: None,
        }
    }

    /// Records the picker selection and, when it names an example, replaces
    /// the SQL input with that example's text. Returns whether the input changed.
    pub fn load_example(&mut self, label: &str) -> bool {
        self.example_choice = Some(label.to_string());
        match find_example(label) {
            Some(example) => {
                self.sql_input = example.query.to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EXAMPLE_PLACEHOLDER;

    #[test]
    fn test_load_example_overwrites_input() {
        let mut session = Session::with_input("SELECT 1");
        assert!(session.load_example("Show all users"));
        assert_eq!(session.sql_input, "SELECT * FROM users;");
        assert_eq!(session.example_choice.as_deref(), Some("Show all users"));
    }

    #[test]
    fn test_placeholder_keeps_input() {
        let mut session = Session::with_input("SELECT name FROM users");
        assert!(!session.load_example(EXAMPLE_PLACEHOLDER));
        assert_eq!(session.sql_input, "SELECT name FROM users");
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::new());
    }
}
