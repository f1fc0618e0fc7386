use crate::db::models::RecordSet;
use crate::db::mysql::MySqlConnector;
use crate::db::session::{Connector, DbSession, with_session};
use crate::db::table::TableHandle;
use crate::error::AppError;
use tracing::{info, warn};

pub const RECORD_ADDED: &str = "Record added successfully";

/// Data access bound to one table. Every operation opens its own connection
/// and closes it before returning.
#[derive(Debug, Clone)]
pub struct TableAccess<C = MySqlConnector> {
    table: TableHandle,
    connector: C,
}

impl TableAccess<MySqlConnector> {
    /// Validates the table name and captures credentials from the environment.
    /// No connection is made yet.
    pub fn new(table_name: &str) -> Result<Self, AppError> {
        Self::with_connector(table_name, MySqlConnector::from_env())
    }
}

impl<C: Connector> TableAccess<C> {
    pub fn with_connector(table_name: &str, connector: C) -> Result<Self, AppError> {
        Ok(Self::for_table(TableHandle::parse(table_name)?, connector))
    }

    pub fn for_table(table: TableHandle, connector: C) -> Self {
        Self { table, connector }
    }

    pub fn table(&self) -> &TableHandle {
        &self.table
    }

    /// `SELECT *` from the bound table.
    pub async fn get_all_records(&self) -> Result<RecordSet, AppError> {
        let sql = self.table.select_all_sql();
        let result = with_session(&self.connector, move |session| {
            Box::pin(async move { session.fetch_all(&sql).await })
        })
        .await;

        match &result {
            Ok(set) => info!(table = %self.table, rows = set.len(), "fetched all records"),
            Err(e) => warn!(table = %self.table, error = %e, "fetching records failed"),
        }
        result
    }

    /// Insert one row; `values` must follow the table's column order.
    ///
    /// An empty list is refused without connecting: MySQL would read
    /// `VALUES ()` as a row of column defaults.
    pub async fn add_record(&self, values: &[String]) -> Result<String, AppError> {
        if values.is_empty() {
            return Err(AppError::NoValues);
        }
        let sql = self.table.insert_sql(values.len());
        let values = values.to_vec();
        let result = with_session(&self.connector, move |session| {
            Box::pin(async move { session.insert(&sql, &values).await })
        })
        .await;

        match result {
            Ok(affected) => {
                info!(table = %self.table, affected, "record added");
                Ok(RECORD_ADDED.to_string())
            }
            Err(e) => {
                warn!(table = %self.table, error = %e, "adding record failed");
                Err(e)
            }
        }
    }
}
