//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    middleware::{self, Next},
    response::Response,
    routing::post,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{jwt_auth_middleware, AuthUser};
use crate::server::routes::{graphql_batch_handler, graphql_handler};
use crate::store::{EmployeeStore, UserStore};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub employees: Arc<dyn EmployeeStore>,
    pub users: Arc<dyn UserStore>,
    pub jwt_service: Arc<JwtService>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Identity resolved by jwt_auth_middleware, absent for anonymous requests
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(
        state.employees.clone(),
        state.users.clone(),
        state.jwt_service.clone(),
        auth_user,
    );

    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router
///
/// The schema is created once here and shared by reference into the
/// dispatch handlers; per-request state flows through the middleware
/// layers (applied in reverse order - last added runs first).
pub fn build_app(
    employees: Arc<dyn EmployeeStore>,
    users: Arc<dyn UserStore>,
    jwt_service: Arc<JwtService>,
) -> Router {
    let schema = Arc::new(create_schema());

    let app_state = AxumAppState {
        employees,
        users,
        jwt_service: jwt_service.clone(),
    };

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphiQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        use crate::server::routes::graphql_playground;
        router = router.route("/graphql", axum::routing::get(graphql_playground));
    }

    router
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
