//! Database module: connection-scoped access to a single user-named table.
//!
//! Layout:
//! - `credentials.rs`: connection credentials captured from the environment
//! - `session.rs`: `Connector`/`DbSession` seam and the scoped `with_session` helper
//! - `mysql.rs`: MySQL implementation of the seam
//! - `table.rs`: validated, quoted table names
//! - `access.rs`: `TableAccess`, the two table operations
//! - `models.rs`: fetched rows and cells

pub mod access;
pub mod credentials;
pub mod models;
pub mod mysql;
pub mod session;
pub mod table;

pub use access::{RECORD_ADDED, TableAccess};
pub use credentials::DbCredentials;
pub use models::{Cell, Record, RecordSet};
pub use mysql::{MySqlConnector, MySqlSession};
pub use session::{Connector, DbSession, with_session};
pub use table::TableHandle;
