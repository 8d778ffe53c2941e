//! MongoDB backend for the store traits.
//!
//! Each store owns a typed collection handle; filters and orderings come
//! from the query builder, so list and page reads see the same predicate
//! the count does.

use anyhow::Result;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};

use crate::domains::auth::models::{NewUser, UserAccount};
use crate::domains::employees::models::{Employee, EmployeePatch, NewEmployee};
use crate::domains::employees::query::{
    build_filter, build_sort, EmployeeFilter, SortField, SortOrder,
};
use crate::store::{EmployeeStore, UserStore};

#[derive(Clone)]
pub struct MongoEmployeeStore {
    collection: Collection<Employee>,
}

impl MongoEmployeeStore {
    pub fn new(database: Database) -> Self {
        Self {
            collection: database.collection("employees"),
        }
    }

    /// Create the secondary indexes backing the filterable and sortable
    /// fields. Idempotent, called once at startup.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let indexes = vec![
            IndexModel::builder().keys(doc! { "name": 1 }).build(),
            IndexModel::builder().keys(doc! { "department": 1 }).build(),
            IndexModel::builder().keys(doc! { "attendance": -1 }).build(),
        ];
        self.collection.create_indexes(indexes).await?;
        Ok(())
    }
}

/// Translate a sparse patch into a `$set` document. The store maintains
/// `updatedAt` on every write.
fn set_document(patch: &EmployeePatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(age) = patch.age {
        set.insert("age", age);
    }
    if let Some(class) = &patch.class {
        set.insert("class", class.clone());
    }
    if let Some(subjects) = &patch.subjects {
        set.insert("subjects", subjects.clone());
    }
    if let Some(attendance) = patch.attendance {
        set.insert("attendance", attendance);
    }
    if let Some(email) = &patch.email {
        set.insert("email", email.clone());
    }
    if let Some(phone) = &patch.phone {
        set.insert("phone", phone.clone());
    }
    if let Some(department) = &patch.department {
        set.insert("department", department.clone());
    }
    if let Some(flagged) = patch.flagged {
        set.insert("flagged", flagged);
    }
    set.insert("updatedAt", bson::DateTime::now());
    set
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn find(
        &self,
        filter: Option<&EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
    ) -> Result<Vec<Employee>> {
        let cursor = self
            .collection
            .find(build_filter(filter))
            .sort(build_sort(sort_by, sort_order))
            .await?;
        cursor.try_collect().await.map_err(Into::into)
    }

    async fn find_page(
        &self,
        filter: Option<&EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Employee>> {
        let cursor = self
            .collection
            .find(build_filter(filter))
            .sort(build_sort(sort_by, sort_order))
            .skip(skip)
            .limit(limit)
            .await?;
        cursor.try_collect().await.map_err(Into::into)
    }

    async fn count_matching(&self, filter: Option<&EmployeeFilter>) -> Result<u64> {
        self.collection
            .count_documents(build_filter(filter))
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Employee>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(Into::into)
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
        self.collection.insert_one(&employee).await?;
        Ok(employee)
    }

    async fn update_by_id(&self, id: ObjectId, patch: EmployeePatch) -> Result<Option<Employee>> {
        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_document(&patch) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(Into::into)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<UserAccount>,
}

impl MongoUserStore {
    pub fn new(database: Database) -> Self {
        Self {
            collection: database.collection("users"),
        }
    }

    /// Unique index on email: the registration check is app-level, the
    /// index closes the race window.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<UserAccount>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(Into::into)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(Into::into)
    }

    async fn insert(&self, new: NewUser) -> Result<UserAccount> {
        let user = UserAccount {
            id: ObjectId::new(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
        };
        self.collection.insert_one(&user).await?;
        Ok(user)
    }
}
