//! In-memory backend for the store traits.
//!
//! Backs the integration test suite (and local experiments) without a
//! running MongoDB. Filtering and ordering go through the same pure
//! helpers in the query module, so behavior matches the Mongo backend.

use anyhow::Result;
use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::domains::auth::models::{NewUser, UserAccount};
use crate::domains::employees::models::{Employee, EmployeePatch, NewEmployee};
use crate::domains::employees::query::{
    compare_by, effective_sort, matches_filter, EmployeeFilter, SortField, SortOrder,
};
use crate::store::{EmployeeStore, UserStore};

#[derive(Default)]
pub struct MemoryEmployeeStore {
    records: RwLock<Vec<Employee>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_matches(
    records: &[Employee],
    filter: Option<&EmployeeFilter>,
    sort_by: Option<SortField>,
    sort_order: Option<SortOrder>,
) -> Vec<Employee> {
    let (field, order) = effective_sort(sort_by, sort_order);
    let mut matches: Vec<Employee> = records
        .iter()
        .filter(|record| matches_filter(record, filter))
        .cloned()
        .collect();
    matches.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    matches
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find(
        &self,
        filter: Option<&EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
    ) -> Result<Vec<Employee>> {
        let records = self.records.read().await;
        Ok(sorted_matches(&records, filter, sort_by, sort_order))
    }

    async fn find_page(
        &self,
        filter: Option<&EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Employee>> {
        let records = self.records.read().await;
        Ok(sorted_matches(&records, filter, sort_by, sort_order)
            .into_iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_matching(&self, filter: Option<&EmployeeFilter>) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| matches_filter(record, filter))
            .count() as u64)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Employee>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id == id).cloned())
    }

    async fn insert(&self, new: NewEmployee) -> Result<Employee> {
        let now = chrono::Utc::now();
        let employee = Employee {
            id: ObjectId::new(),
            name: new.name,
            age: new.age,
            class: new.class,
            subjects: new.subjects,
            attendance: new.attendance,
            email: new.email,
            phone: new.phone,
            department: new.department,
            flagged: false,
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn update_by_id(&self, id: ObjectId, patch: EmployeePatch) -> Result<Option<Employee>> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };
        patch.apply(record);
        record.updated_at = chrono::Utc::now();
        Ok(Some(record.clone()))
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id != id);
        Ok(records.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    accounts: RwLock<Vec<UserAccount>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|account| account.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|account| account.email == email).cloned())
    }

    async fn insert(&self, new: NewUser) -> Result<UserAccount> {
        let user = UserAccount {
            id: ObjectId::new(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
        };
        self.accounts.write().await.push(user.clone());
        Ok(user)
    }
}
