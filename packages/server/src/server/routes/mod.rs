pub mod graphql;

pub use graphql::{graphql_batch_handler, graphql_handler, graphql_playground};
