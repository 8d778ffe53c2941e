//! Employee domain actions - business logic behind the employee
//! queries and mutations. Authorization is the resolvers' concern; every
//! function here assumes its gate has already passed.

use bson::oid::ObjectId;
use tracing::info;

use crate::common::ApiError;
use crate::domains::employees::models::{Employee, EmployeePage, EmployeePatch, NewEmployee};
use crate::domains::employees::query::{EmployeeFilter, SortField, SortOrder};
use crate::store::EmployeeStore;

/// Parse a client-supplied id, rejecting malformed ones before any store
/// round-trip.
fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::Validation(format!("Invalid employee id: {id}")))
}

/// All records matching the filter, ordered per the sort spec, unpaginated.
pub async fn list_employees(
    filter: Option<EmployeeFilter>,
    sort_by: Option<SortField>,
    sort_order: Option<SortOrder>,
    store: &dyn EmployeeStore,
) -> Result<Vec<Employee>, ApiError> {
    Ok(store.find(filter.as_ref(), sort_by, sort_order).await?)
}

/// Single record by id, or `None` when absent.
pub async fn get_employee(id: &str, store: &dyn EmployeeStore) -> Result<Option<Employee>, ApiError> {
    let id = parse_id(id)?;
    Ok(store.find_by_id(id).await?)
}

/// One page of records plus the filter-wide total count.
///
/// The page fetch and the count are independent store operations and run
/// concurrently; the count ignores the window, so it stays correct even
/// when the requested page lies beyond the data.
pub async fn paginate_employees(
    filter: Option<EmployeeFilter>,
    sort_by: Option<SortField>,
    sort_order: Option<SortOrder>,
    page: i32,
    page_size: i32,
    store: &dyn EmployeeStore,
) -> Result<EmployeePage, ApiError> {
    if page < 1 || page_size < 1 {
        return Err(ApiError::Validation(
            "page and pageSize must be at least 1".to_string(),
        ));
    }

    let skip = (page as u64 - 1) * page_size as u64;
    let (items, total_count) = tokio::try_join!(
        store.find_page(filter.as_ref(), sort_by, sort_order, skip, page_size as i64),
        store.count_matching(filter.as_ref()),
    )?;

    Ok(EmployeePage {
        items,
        total_count,
        page,
        page_size,
    })
}

/// Create a record from validated input.
pub async fn add_employee(
    new: NewEmployee,
    store: &dyn EmployeeStore,
) -> Result<Employee, ApiError> {
    if new.name.trim().is_empty() {
        return Err(ApiError::Validation("name must not be empty".to_string()));
    }

    let employee = store.insert(new).await?;
    info!(employee_id = %employee.id, "Created employee record");
    Ok(employee)
}

/// Sparse partial update: only the fields present in the patch change.
///
/// Fails with `NotFound` when no record has the id.
pub async fn update_employee(
    id: &str,
    patch: EmployeePatch,
    store: &dyn EmployeeStore,
) -> Result<Employee, ApiError> {
    let id = parse_id(id)?;
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("name must not be empty".to_string()));
        }
    }

    let updated = store.update_by_id(id, patch).await?.ok_or(ApiError::NotFound)?;
    info!(employee_id = %updated.id, "Updated employee record");
    Ok(updated)
}

/// Delete by id. Returns whether a record was actually removed; a missing
/// id is not an error.
pub async fn delete_employee(id: &str, store: &dyn EmployeeStore) -> Result<bool, ApiError> {
    let id = parse_id(id)?;
    let deleted = store.delete_by_id(id).await?;
    if deleted {
        info!(employee_id = %id, "Deleted employee record");
    }
    Ok(deleted)
}
