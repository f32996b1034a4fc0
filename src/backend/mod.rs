//! Collaborators the registration workflow talks to.
//!
//! - `traits`: lookup and mutation seams the workflow is written against
//! - `validation`: uniqueness checks built on the lookups
//! - `graphql`: Keystone GraphQL implementation
//! - `memory`: in-process implementation for dry runs and tests
//! - `supabase`: casino registration table

pub mod graphql;
pub mod http;
pub mod memory;
pub mod queries;
pub mod supabase;
pub mod traits;
pub mod types;
pub mod validation;

pub use graphql::GraphQlClient;
pub use memory::{BackendCall, MemoryBackend};
pub use traits::{RecordLookup, RegistrationBackend};
pub use validation::{check_existence, ExistenceCheck, ExistenceQuery};
