mod client;
mod types;

pub use client::{QueryDispatcher, DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT};
pub(crate) use client::http_client;
pub use types::{Query, QueryError, QueryId, QueryKind, QueryResult};
