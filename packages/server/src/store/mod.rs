//! Persistence collaborator interface.
//!
//! The resolution layer reaches the document store only through these
//! narrow traits. `mongo` holds the production MongoDB backend; `memory`
//! is a lock-protected in-process backend with identical filter and sort
//! semantics, used by the integration tests.

pub mod memory;
pub mod mongo;

use anyhow::Result;
use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domains::auth::models::{NewUser, UserAccount};
use crate::domains::employees::models::{Employee, EmployeePatch, NewEmployee};
use crate::domains::employees::query::{EmployeeFilter, SortField, SortOrder};

pub use memory::{MemoryEmployeeStore, MemoryUserStore};
pub use mongo::{MongoEmployeeStore, MongoUserStore};

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records matching the filter, ordered per the sort spec.
    async fn find(
        &self,
        filter: Option<&EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
    ) -> Result<Vec<Employee>>;

    /// At most `limit` matching records starting at `skip`, ordered per
    /// the sort spec.
    async fn find_page(
        &self,
        filter: Option<&EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Employee>>;

    /// Count of all records matching the filter, unbounded by any window.
    async fn count_matching(&self, filter: Option<&EmployeeFilter>) -> Result<u64>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Employee>>;

    /// Insert a new record; the store assigns the id and timestamps.
    async fn insert(&self, new: NewEmployee) -> Result<Employee>;

    /// Apply a sparse patch. Returns the updated record, or `None` when no
    /// record has the id.
    async fn update_by_id(&self, id: ObjectId, patch: EmployeePatch) -> Result<Option<Employee>>;

    /// Delete by id; returns whether a record was removed.
    async fn delete_by_id(&self, id: ObjectId) -> Result<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UserAccount>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>>;
    async fn insert(&self, new: NewUser) -> Result<UserAccount>;
}
