//! GraphQL schema definition.
//!
//! The operation registry: every query and mutation, its argument shape,
//! its authorization requirement, and its resolver body. The schema is
//! built once at startup and shared by reference into the dispatch
//! handlers; resolvers run their gate before touching any store.

use juniper::{EmptySubscription, RootNode, ID};

use super::context::GraphQLContext;
use crate::common::ApiError;
use crate::domains::auth::actions as auth_actions;
use crate::domains::auth::data::{AuthPayloadData, UserData};
use crate::domains::auth::models::Role;
use crate::domains::employees::actions as employee_actions;
use crate::domains::employees::data::{
    AddEmployeeInput, EmployeeData, EmployeePageData, UpdateEmployeeInput,
};
use crate::domains::employees::query::{EmployeeFilter, SortField, SortOrder};

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// The account of the current identity, or null when unauthenticated.
    async fn me(ctx: &GraphQLContext) -> Result<Option<UserData>, ApiError> {
        let Some(user) = &ctx.auth_user else {
            return Ok(None);
        };
        let Ok(id) = bson::oid::ObjectId::parse_str(&user.user_id) else {
            return Ok(None);
        };
        let account = ctx.users.find_by_id(id).await?;
        Ok(account.map(UserData::from))
    }

    /// All records matching an optional filter, ordered per the sort spec.
    async fn employees(
        ctx: &GraphQLContext,
        filter: Option<EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
    ) -> Result<Vec<EmployeeData>, ApiError> {
        ctx.require_auth()?;
        let records =
            employee_actions::list_employees(filter, sort_by, sort_order, ctx.employees.as_ref())
                .await?;
        Ok(records.into_iter().map(EmployeeData::from).collect())
    }

    /// A single record by id, or null when absent.
    async fn employee(ctx: &GraphQLContext, id: ID) -> Result<Option<EmployeeData>, ApiError> {
        ctx.require_auth()?;
        let record = employee_actions::get_employee(&id, ctx.employees.as_ref()).await?;
        Ok(record.map(EmployeeData::from))
    }

    /// A page of matching records with the filter-wide total count.
    async fn employees_paginated(
        ctx: &GraphQLContext,
        filter: Option<EmployeeFilter>,
        sort_by: Option<SortField>,
        sort_order: Option<SortOrder>,
        #[graphql(default = 1)] page: i32,
        #[graphql(default = 10)] page_size: i32,
    ) -> Result<EmployeePageData, ApiError> {
        ctx.require_auth()?;
        let result = employee_actions::paginate_employees(
            filter,
            sort_by,
            sort_order,
            page,
            page_size,
            ctx.employees.as_ref(),
        )
        .await?;
        Ok(result.into())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Create an account and sign it in. Role defaults to EMPLOYEE.
    async fn register(
        ctx: &GraphQLContext,
        name: String,
        email: String,
        password: String,
        role: Option<Role>,
    ) -> Result<AuthPayloadData, ApiError> {
        let result = auth_actions::register(
            name,
            email,
            password,
            role,
            ctx.users.as_ref(),
            &ctx.jwt_service,
        )
        .await?;
        Ok(result.into())
    }

    /// Verify credentials and sign in.
    async fn login(
        ctx: &GraphQLContext,
        email: String,
        password: String,
    ) -> Result<AuthPayloadData, ApiError> {
        let result =
            auth_actions::login(email, password, ctx.users.as_ref(), &ctx.jwt_service).await?;
        Ok(result.into())
    }

    /// Create a record (admin only).
    async fn add_employee(
        ctx: &GraphQLContext,
        input: AddEmployeeInput,
    ) -> Result<EmployeeData, ApiError> {
        ctx.require_role(&[Role::Admin])?;
        let record = employee_actions::add_employee(input.into(), ctx.employees.as_ref()).await?;
        Ok(record.into())
    }

    /// Partially update the record identified by `input.id` (admin only).
    /// Fields absent from the input are left untouched.
    async fn update_employee(
        ctx: &GraphQLContext,
        input: UpdateEmployeeInput,
    ) -> Result<EmployeeData, ApiError> {
        ctx.require_role(&[Role::Admin])?;
        let id = input.id.clone();
        let record =
            employee_actions::update_employee(&id, input.into(), ctx.employees.as_ref()).await?;
        Ok(record.into())
    }

    /// Delete a record by id (admin only). Returns whether a record was
    /// actually removed; a missing id is not an error.
    async fn delete_employee(ctx: &GraphQLContext, id: ID) -> Result<bool, ApiError> {
        ctx.require_role(&[Role::Admin])?;
        employee_actions::delete_employee(&id, ctx.employees.as_ref()).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
