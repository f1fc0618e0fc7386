use crate::db::credentials::DbCredentials;
use crate::db::models::{Cell, Record, RecordSet};
use crate::db::session::{Connector, DbSession};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column, Connection, Executor, Row, ValueRef};
use tracing::debug;

/// Opens one [`MySqlConnection`] per session from captured credentials.
#[derive(Debug, Clone)]
pub struct MySqlConnector {
    credentials: DbCredentials,
}

impl MySqlConnector {
    pub fn new(credentials: DbCredentials) -> Self {
        Self { credentials }
    }

    /// Capture `host`, `user`, `password` and `database` from the environment.
    pub fn from_env() -> Self {
        Self::new(DbCredentials::from_env())
    }

    pub fn credentials(&self) -> &DbCredentials {
        &self.credentials
    }

    /// Missing credentials are reported here, as a driver configuration error.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        if let Some(key) = self.credentials.first_missing() {
            return Err(sqlx::Error::Configuration(
                format!("missing environment variable `{key}`").into(),
            ));
        }
        let (host, port) = self.credentials.host_and_port().ok_or_else(|| {
            sqlx::Error::Configuration("invalid port in environment variable `host`".into())
        })?;

        let creds = &self.credentials;
        Ok(MySqlConnectOptions::new()
            .host(host)
            .port(port)
            .username(creds.user.as_deref().unwrap_or_default())
            .password(creds.password.as_deref().unwrap_or_default())
            .database(creds.database.as_deref().unwrap_or_default()))
    }
}

impl Connector for MySqlConnector {
    type Session = MySqlSession;

    async fn connect(&self) -> Result<MySqlSession, sqlx::Error> {
        let options = self.connect_options()?;
        let conn = MySqlConnection::connect_with(&options).await?;
        Ok(MySqlSession { conn })
    }
}

pub struct MySqlSession {
    conn: MySqlConnection,
}

impl DbSession for MySqlSession {
    async fn fetch_all(&mut self, sql: &str) -> Result<RecordSet, sqlx::Error> {
        // No bind parameters, so this goes over the text protocol and every
        // column arrives as its textual representation.
        let rows = (&mut self.conn).fetch_all(sqlx::raw_sql(sql)).await?;
        debug!(rows = rows.len(), "statement returned rows");
        let mut set = record_set_from_rows(&rows)?;

        // Without rows there is no row metadata; ask the server for the
        // statement's columns instead.
        if set.columns.is_empty() {
            let described = (&mut self.conn).describe(sql).await?;
            set.columns = column_names(described.columns());
        }
        Ok(set)
    }

    async fn insert(&mut self, sql: &str, values: &[String]) -> Result<u64, sqlx::Error> {
        let mut tx = self.conn.begin().await?;
        let mut query = sqlx::query(sql);
        for value in values {
            query = query.bind(value.as_str());
        }
        let done = query.execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(done.rows_affected())
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        self.conn.close().await
    }
}

fn record_set_from_rows(rows: &[MySqlRow]) -> Result<RecordSet, sqlx::Error> {
    let columns = rows
        .first()
        .map(|row| column_names(row.columns()))
        .unwrap_or_default();
    let rows = rows.iter().map(decode_row).collect::<Result<_, _>>()?;
    Ok(RecordSet::new(columns, rows))
}

fn column_names<C: Column>(columns: &[C]) -> Vec<String> {
    columns.iter().map(|c| c.name().to_string()).collect()
}

fn decode_row(row: &MySqlRow) -> Result<Record, sqlx::Error> {
    (0..row.len())
        .map(|idx| {
            if row.try_get_raw(idx)?.is_null() {
                return Ok(Cell::Null);
            }
            let bytes: Vec<u8> = row.try_get_unchecked(idx)?;
            Ok(Cell::from_bytes(bytes))
        })
        .collect()
}
