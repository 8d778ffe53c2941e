// Employee Directory - API Core
//
// GraphQL backend for an employee record collection with JWT authentication
// and role-based write authorization. Domain logic lives in domains/*,
// persistence behind the traits in store/, and the HTTP + GraphQL surface
// in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;
pub mod store;

pub use config::*;
