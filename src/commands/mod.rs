//! Command implementations

pub mod query;
pub mod session;

pub use query::{QueryResult, run_query};
pub use session::run_session;
