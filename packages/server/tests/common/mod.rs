//! Shared test support: in-memory backend, GraphQL client, fixtures.

pub mod graphql;

pub use graphql::{GraphQLClient, GraphQLResult, TestBackend};

use serde_json::Value;
use server_core::domains::employees::models::NewEmployee;

/// A minimal new-employee fixture; override fields with struct update
/// syntax where a test needs them.
pub fn new_employee(name: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        age: None,
        class: None,
        subjects: vec![],
        attendance: None,
        email: None,
        phone: None,
        department: None,
    }
}

/// Names of the records in a JSON array, in result order.
pub fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|record| record["name"].as_str().expect("record name").to_string())
        .collect()
}
