use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject, ID};

use crate::domains::employees::models::{
    Employee as EmployeeModel, EmployeePage, EmployeePatch, NewEmployee,
};

/// Employee GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "Employee")]
pub struct EmployeeData {
    pub id: ID,
    pub name: String,
    pub age: Option<i32>,
    pub class: Option<String>,
    pub subjects: Vec<String>,
    /// Attendance percentage (0-100)
    pub attendance: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub flagged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeModel> for EmployeeData {
    fn from(employee: EmployeeModel) -> Self {
        Self {
            id: ID::new(employee.id.to_hex()),
            name: employee.name,
            age: employee.age,
            class: employee.class,
            subjects: employee.subjects,
            attendance: employee.attendance,
            email: employee.email,
            phone: employee.phone,
            department: employee.department,
            flagged: employee.flagged,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// One page of records with the filter-wide total count.
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "EmployeePage")]
pub struct EmployeePageData {
    pub items: Vec<EmployeeData>,
    pub total_count: i32,
    pub page: i32,
    pub page_size: i32,
}

impl From<EmployeePage> for EmployeePageData {
    fn from(page: EmployeePage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total_count: page.total_count as i32,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(name = "AddEmployeeInput")]
pub struct AddEmployeeInput {
    pub name: String,
    pub age: Option<i32>,
    pub class: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub attendance: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

impl From<AddEmployeeInput> for NewEmployee {
    fn from(input: AddEmployeeInput) -> Self {
        Self {
            name: input.name,
            age: input.age,
            class: input.class,
            subjects: input.subjects.unwrap_or_default(),
            attendance: input.attendance,
            email: input.email,
            phone: input.phone,
            department: input.department,
        }
    }
}

/// Sparse update input: absent fields (and explicit nulls) leave the
/// record untouched.
#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(name = "UpdateEmployeeInput")]
pub struct UpdateEmployeeInput {
    pub id: ID,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub class: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub attendance: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub flagged: Option<bool>,
}

impl From<UpdateEmployeeInput> for EmployeePatch {
    fn from(input: UpdateEmployeeInput) -> Self {
        Self {
            name: input.name,
            age: input.age,
            class: input.class,
            subjects: input.subjects,
            attendance: input.attendance,
            email: input.email,
            phone: input.phone,
            department: input.department,
            flagged: input.flagged,
        }
    }
}
