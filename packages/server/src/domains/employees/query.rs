//! Filter and sort query builder.
//!
//! `build_filter` and `build_sort` are pure translations from the client's
//! structured arguments into backing-store documents; the unpaginated list
//! and the paginated page go through the same pair, so a filter's item set
//! and its total count always agree. `matches_filter` and `compare_by`
//! mirror the same semantics in plain Rust for the in-memory backend.

use bson::{doc, Document};
use juniper::{GraphQLEnum, GraphQLInputObject};
use std::cmp::Ordering;

use crate::domains::employees::models::Employee;

/// Structured record constraints. An absent field imposes no constraint;
/// both bounds of a numeric pair combine into an inclusive range.
#[derive(Debug, Clone, Default, GraphQLInputObject)]
#[graphql(name = "EmployeeFilter")]
pub struct EmployeeFilter {
    /// Case-insensitive substring match against the name
    pub name: Option<String>,
    pub class: Option<String>,
    pub department: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub min_attendance: Option<f64>,
    pub max_attendance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
#[graphql(name = "EmployeeSortField")]
pub enum SortField {
    Name,
    Age,
    Attendance,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
#[graphql(name = "SortOrder")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Resolve the sort specification's defaults.
///
/// An omitted field means `createdAt` descending regardless of a supplied
/// order; order only applies alongside an explicit field, and defaults to
/// ascending there.
pub fn effective_sort(field: Option<SortField>, order: Option<SortOrder>) -> (SortField, SortOrder) {
    match field {
        Some(field) => (field, order.unwrap_or(SortOrder::Asc)),
        None => (SortField::CreatedAt, SortOrder::Desc),
    }
}

/// Translate a filter spec into a store predicate document.
pub fn build_filter(filter: Option<&EmployeeFilter>) -> Document {
    let mut query = Document::new();
    let Some(filter) = filter else {
        return query;
    };

    if let Some(name) = &filter.name {
        // Substring semantics: the pattern is the escaped literal
        query.insert(
            "name",
            doc! { "$regex": regex::escape(name), "$options": "i" },
        );
    }
    if let Some(class) = &filter.class {
        query.insert("class", class.clone());
    }
    if let Some(department) = &filter.department {
        query.insert("department", department.clone());
    }

    let mut age = Document::new();
    if let Some(min) = filter.min_age {
        age.insert("$gte", min);
    }
    if let Some(max) = filter.max_age {
        age.insert("$lte", max);
    }
    if !age.is_empty() {
        query.insert("age", age);
    }

    let mut attendance = Document::new();
    if let Some(min) = filter.min_attendance {
        attendance.insert("$gte", min);
    }
    if let Some(max) = filter.max_attendance {
        attendance.insert("$lte", max);
    }
    if !attendance.is_empty() {
        query.insert("attendance", attendance);
    }

    query
}

/// Translate a sort spec into a single-key ordering document.
pub fn build_sort(field: Option<SortField>, order: Option<SortOrder>) -> Document {
    let (field, order) = effective_sort(field, order);
    let direction = match order {
        SortOrder::Asc => 1,
        SortOrder::Desc => -1,
    };
    let key = match field {
        SortField::Name => "name",
        SortField::Age => "age",
        SortField::Attendance => "attendance",
        SortField::CreatedAt => "createdAt",
    };
    doc! { key: direction }
}

/// In-memory counterpart of `build_filter`: does this record match?
///
/// A record with a missing numeric field never matches a bound on that
/// field, mirroring how the store's range operators skip nulls.
pub fn matches_filter(employee: &Employee, filter: Option<&EmployeeFilter>) -> bool {
    let Some(filter) = filter else {
        return true;
    };

    if let Some(name) = &filter.name {
        if !employee.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }
    if let Some(class) = &filter.class {
        if employee.class.as_deref() != Some(class.as_str()) {
            return false;
        }
    }
    if let Some(department) = &filter.department {
        if employee.department.as_deref() != Some(department.as_str()) {
            return false;
        }
    }

    if filter.min_age.is_some() || filter.max_age.is_some() {
        let Some(age) = employee.age else {
            return false;
        };
        if filter.min_age.is_some_and(|min| age < min) {
            return false;
        }
        if filter.max_age.is_some_and(|max| age > max) {
            return false;
        }
    }

    if filter.min_attendance.is_some() || filter.max_attendance.is_some() {
        let Some(attendance) = employee.attendance else {
            return false;
        };
        if filter.min_attendance.is_some_and(|min| attendance < min) {
            return false;
        }
        if filter.max_attendance.is_some_and(|max| attendance > max) {
            return false;
        }
    }

    true
}

/// In-memory counterpart of `build_sort`: ascending comparison on one
/// field. Missing values sort before present ones, as the store orders
/// nulls; descending callers reverse the result.
pub fn compare_by(a: &Employee, b: &Employee, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Attendance => a
            .attendance
            .partial_cmp(&b.attendance)
            .unwrap_or(Ordering::Equal),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}
