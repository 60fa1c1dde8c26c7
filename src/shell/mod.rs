// Composition root.
//
// - Read config from the environment.
// - Instantiate the outbound adapters and wire them into use case handlers.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod session;
pub mod state;
