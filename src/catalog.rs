//! Example queries and practice exercises offered next to the query runner.

use serde::Serialize;

/// Label shown in the example picker when nothing is chosen.
pub const EXAMPLE_PLACEHOLDER: &str = "Select an example";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub label: &'static str,
    pub query: &'static str,
}

pub const EXAMPLES: &[Example] = &[
    Example {
        label: "Show all users",
        query: "SELECT * FROM users;",
    },
    Example {
        label: "Users from Goa",
        query: "SELECT * FROM users WHERE city='Goa';",
    },
    Example {
        label: "Orders by Adarsh",
        query: "SELECT o.*
FROM orders o
JOIN users u ON u.id = o.user_id
WHERE u.name = 'Adarsh';",
    },
    Example {
        label: "Latest 3 orders",
        query: "SELECT * FROM orders ORDER BY created_at DESC LIMIT 3;",
    },
    Example {
        label: "Total PAID amount",
        query: "SELECT SUM(amount) AS total_paid
FROM orders
WHERE status='PAID';",
    },
    Example {
        label: "Orders with customer name (JOIN)",
        query: "SELECT o.id, u.name, o.amount, o.status, o.created_at
FROM orders o
JOIN users u ON u.id = o.user_id
ORDER BY o.created_at DESC;",
    },
    Example {
        label: "Count users per city",
        query: "SELECT city, COUNT(*) AS total
FROM users
GROUP BY city;",
    },
];

pub const EXERCISES: &[&str] = &[
    "Show all users",
    "Show users from Goa",
    "Show orders where amount > 1000",
    "Show all orders by Pranjali",
    "Show total PAID amount",
    "Count users by city",
    "Show top 2 highest orders",
];

pub fn find_example(label: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|e| e.label == label)
}

/// Exercises as a numbered list, one per line: `1) Show all users`.
pub fn numbered_exercises() -> String {
    EXERCISES
        .iter()
        .enumerate()
        .map(|(i, text)| format!("{}) {}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(EXAMPLES.len(), 7);
        assert_eq!(EXERCISES.len(), 7);
    }

    #[test]
    fn test_example_labels_are_unique() {
        let labels: HashSet<_> = EXAMPLES.iter().map(|e| e.label).collect();
        assert_eq!(labels.len(), EXAMPLES.len());
        assert!(!labels.contains(EXAMPLE_PLACEHOLDER));
    }

    #[test]
    fn test_find_example() {
        assert_eq!(
            find_example("Latest 3 orders").map(|e| e.query),
            Some("SELECT * FROM orders ORDER BY created_at DESC LIMIT 3;")
        );
        assert!(find_example(EXAMPLE_PLACEHOLDER).is_none());
    }

    #[test]
    fn test_numbered_exercises() {
        let text = numbered_exercises();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "1) Show all users");
        assert_eq!(lines[6], "7) Show top 2 highest orders");
    }
}
