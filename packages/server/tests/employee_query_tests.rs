//! Integration tests for employee queries: filtering, sorting, lookup.

mod common;

use common::{names, new_employee, TestBackend};
use juniper::{InputValue, Variables};
use server_core::domains::auth::models::Role;
use server_core::domains::employees::models::NewEmployee;

fn id_vars(id: &str) -> Variables {
    let mut vars = Variables::new();
    vars.insert("id".to_string(), InputValue::scalar(id.to_string()));
    vars
}

/// Attendance fixture: 85, 92, 97, and one record with no attendance on
/// file.
async fn seed_attendance_set(backend: &TestBackend) {
    backend
        .seed_employee(NewEmployee {
            attendance: Some(85.0),
            ..new_employee("Low")
        })
        .await;
    backend
        .seed_employee(NewEmployee {
            attendance: Some(92.0),
            ..new_employee("Mid")
        })
        .await;
    backend
        .seed_employee(NewEmployee {
            attendance: Some(97.0),
            ..new_employee("High")
        })
        .await;
    backend.seed_employee(new_employee("Absent")).await;
}

#[tokio::test]
async fn attendance_bound_excludes_below_and_missing_regardless_of_sort() {
    let backend = TestBackend::new();
    seed_attendance_set(&backend).await;
    let client = backend.with_role(Role::Employee);

    for sort in ["sortBy: NAME", "sortBy: ATTENDANCE, sortOrder: DESC", ""] {
        let query = format!(
            "{{ employees(filter: {{ minAttendance: 90 }}, {sort}) {{ name attendance }} }}"
        );
        let data = client.query(&query).await;

        let mut matched = names(&data["employees"]);
        matched.sort();
        assert_eq!(matched, vec!["High", "Mid"], "sort args: {sort}");
    }
}

#[tokio::test]
async fn age_range_bounds_are_inclusive_and_independent() {
    let backend = TestBackend::new();
    for (name, age) in [("A", 21), ("B", 30), ("C", 39), ("D", 45)] {
        backend
            .seed_employee(NewEmployee {
                age: Some(age),
                ..new_employee(name)
            })
            .await;
    }
    backend.seed_employee(new_employee("NoAge")).await;
    let client = backend.with_role(Role::Employee);

    let both = client
        .query("{ employees(filter: { minAge: 30, maxAge: 39 }, sortBy: NAME) { name } }")
        .await;
    assert_eq!(names(&both["employees"]), vec!["B", "C"]);

    let min_only = client
        .query("{ employees(filter: { minAge: 30 }, sortBy: NAME) { name } }")
        .await;
    assert_eq!(names(&min_only["employees"]), vec!["B", "C", "D"]);

    let max_only = client
        .query("{ employees(filter: { maxAge: 30 }, sortBy: NAME) { name } }")
        .await;
    assert_eq!(names(&max_only["employees"]), vec!["A", "B"]);
}

#[tokio::test]
async fn name_filter_matches_substrings_case_insensitively() {
    let backend = TestBackend::new();
    for name in ["Ravi Kumar", "Amit", "Pravin"] {
        backend.seed_employee(new_employee(name)).await;
    }
    let client = backend.with_role(Role::Employee);

    let data = client
        .query(r#"{ employees(filter: { name: "RAV" }, sortBy: NAME) { name } }"#)
        .await;
    assert_eq!(names(&data["employees"]), vec!["Pravin", "Ravi Kumar"]);
}

#[tokio::test]
async fn class_and_department_filters_are_exact() {
    let backend = TestBackend::new();
    backend
        .seed_employee(NewEmployee {
            department: Some("Eng".to_string()),
            class: Some("B2".to_string()),
            ..new_employee("A")
        })
        .await;
    backend
        .seed_employee(NewEmployee {
            department: Some("Engineering".to_string()),
            class: Some("B2".to_string()),
            ..new_employee("B")
        })
        .await;
    backend
        .seed_employee(NewEmployee {
            department: Some("Eng".to_string()),
            class: Some("B1".to_string()),
            ..new_employee("C")
        })
        .await;
    let client = backend.with_role(Role::Employee);

    let dept = client
        .query(r#"{ employees(filter: { department: "Eng" }, sortBy: NAME) { name } }"#)
        .await;
    assert_eq!(names(&dept["employees"]), vec!["A", "C"]);

    let combined = client
        .query(r#"{ employees(filter: { department: "Eng", class: "B2" }) { name } }"#)
        .await;
    assert_eq!(names(&combined["employees"]), vec!["A"]);
}

#[tokio::test]
async fn results_are_monotonic_in_the_declared_sort() {
    let backend = TestBackend::new();
    for (name, age, attendance) in [
        ("Chandra", 45, 71.5),
        ("Asha", 28, 93.0),
        ("Bela", 36, 88.0),
    ] {
        backend
            .seed_employee(NewEmployee {
                age: Some(age),
                attendance: Some(attendance),
                ..new_employee(name)
            })
            .await;
    }
    let client = backend.with_role(Role::Employee);

    let by_name = client.query("{ employees(sortBy: NAME) { name } }").await;
    assert_eq!(names(&by_name["employees"]), vec!["Asha", "Bela", "Chandra"]);

    let by_age_desc = client
        .query("{ employees(sortBy: AGE, sortOrder: DESC) { name } }")
        .await;
    assert_eq!(
        names(&by_age_desc["employees"]),
        vec!["Chandra", "Bela", "Asha"]
    );

    let by_attendance = client
        .query("{ employees(sortBy: ATTENDANCE) { name } }")
        .await;
    assert_eq!(
        names(&by_attendance["employees"]),
        vec!["Chandra", "Bela", "Asha"]
    );
}

#[tokio::test]
async fn default_sort_is_newest_first() {
    let backend = TestBackend::new();
    for name in ["First", "Second", "Third"] {
        backend.seed_employee(new_employee(name)).await;
    }
    let client = backend.with_role(Role::Employee);

    let data = client.query("{ employees { name } }").await;
    assert_eq!(names(&data["employees"]), vec!["Third", "Second", "First"]);

    // A bare sortOrder does not override the default field or direction
    let with_order = client
        .query("{ employees(sortOrder: ASC) { name } }")
        .await;
    assert_eq!(
        names(&with_order["employees"]),
        vec!["Third", "Second", "First"]
    );
}

#[tokio::test]
async fn employee_lookup_by_id() {
    let backend = TestBackend::new();
    let seeded = backend
        .seed_employee(NewEmployee {
            department: Some("Ops".to_string()),
            ..new_employee("Ravi")
        })
        .await;
    let client = backend.with_role(Role::Employee);

    let found = client
        .query_with_vars(
            "query($id: ID!) { employee(id: $id) { name department } }",
            id_vars(&seeded.id.to_hex()),
        )
        .await;
    assert_eq!(found["employee"]["name"], "Ravi");
    assert_eq!(found["employee"]["department"], "Ops");

    // Well-formed but unknown id resolves to null
    let missing = client
        .query_with_vars(
            "query($id: ID!) { employee(id: $id) { name } }",
            id_vars(&bson::oid::ObjectId::new().to_hex()),
        )
        .await;
    assert!(missing["employee"].is_null());
}

#[tokio::test]
async fn malformed_id_is_a_validation_fault() {
    let backend = TestBackend::new();
    let client = backend.with_role(Role::Employee);

    let result = client
        .execute(r#"{ employee(id: "not-an-object-id") { name } }"#)
        .await;
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Invalid employee id"));
}
