//! Employee domain: the record model, the filter/sort query builder,
//! and the actions behind the employee queries and mutations.

pub mod actions;
pub mod data;
pub mod models;
pub mod query;

pub use models::{Employee, EmployeePage, EmployeePatch, NewEmployee};
pub use query::{EmployeeFilter, SortField, SortOrder};
