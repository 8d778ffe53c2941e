use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee record - document persistence layer
///
/// `id` is store-assigned and immutable; the timestamps are maintained by
/// the store on insert and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Attendance percentage (0-100)
    #[serde(default)]
    pub attendance: Option<f64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub flagged: bool,
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new record. Only the name is required; `flagged`
/// starts false and `subjects` defaults to empty.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub age: Option<i32>,
    pub class: Option<String>,
    pub subjects: Vec<String>,
    pub attendance: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

/// Sparse partial update: `None` means "leave the field unchanged".
///
/// A field can be set but not cleared through an update; the GraphQL layer
/// collapses absent and explicitly-null input fields into `None`.
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
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

impl EmployeePatch {
    /// Apply the present fields to a record, leaving the rest untouched.
    pub fn apply(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(age) = self.age {
            employee.age = Some(age);
        }
        if let Some(class) = &self.class {
            employee.class = Some(class.clone());
        }
        if let Some(subjects) = &self.subjects {
            employee.subjects = subjects.clone();
        }
        if let Some(attendance) = self.attendance {
            employee.attendance = Some(attendance);
        }
        if let Some(email) = &self.email {
            employee.email = Some(email.clone());
        }
        if let Some(phone) = &self.phone {
            employee.phone = Some(phone.clone());
        }
        if let Some(department) = &self.department {
            employee.department = Some(department.clone());
        }
        if let Some(flagged) = self.flagged {
            employee.flagged = flagged;
        }
    }
}

/// Windowed query result: one page of records plus the filter-wide total.
#[derive(Debug, Clone)]
pub struct EmployeePage {
    pub items: Vec<Employee>,
    pub total_count: u64,
    pub page: i32,
    pub page_size: i32,
}
