#![allow(dead_code)]

use dbms_projects::db::{Cell, Connector, DbSession, RecordSet};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct MockTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Default)]
struct MockState {
    tables: HashMap<String, MockTable>,
    opened: usize,
    closed: usize,
    connect_error: Option<String>,
}

/// In-memory stand-in for a MySQL server that counts opened and closed sessions.
#[derive(Debug, Clone, Default)]
pub struct MockDb {
    state: Arc<Mutex<MockState>>,
}

impl MockDb {
    pub fn with_table(self, name: &str, columns: &[&str], rows: &[&[&str]]) -> Self {
        let table = MockTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        };
        self.state
            .lock()
            .unwrap()
            .tables
            .insert(name.to_string(), table);
        self
    }

    /// `users (id, name)` holding `(1, "a")` and `(2, "b")`.
    pub fn users() -> Self {
        MockDb::default().with_table("users", &["id", "name"], &[&["1", "a"], &["2", "b"]])
    }

    pub fn refusing_connections(message: &str) -> Self {
        let db = MockDb::default();
        db.state.lock().unwrap().connect_error = Some(message.to_string());
        db
    }

    pub fn opened(&self) -> usize {
        self.state.lock().unwrap().opened
    }

    pub fn closed(&self) -> usize {
        self.state.lock().unwrap().closed
    }

    pub fn rows(&self, table: &str) -> Vec<Vec<String>> {
        self.state.lock().unwrap().tables[table].rows.clone()
    }

    fn open(&self) -> Result<MockSession, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.connect_error {
            return Err(sqlx::Error::Configuration(message.clone().into()));
        }
        state.opened += 1;
        Ok(MockSession { db: self.clone() })
    }

    fn select(&self, sql: &str) -> Result<RecordSet, sqlx::Error> {
        let name = sql
            .strip_prefix("SELECT * FROM `")
            .and_then(|rest| rest.strip_suffix('`'))
            .ok_or_else(|| sqlx::Error::Protocol(format!("unexpected statement: {sql}")))?;
        let state = self.state.lock().unwrap();
        let table = state.tables.get(name).ok_or_else(|| no_such_table(name))?;
        Ok(RecordSet::new(
            table.columns.clone(),
            table
                .rows
                .iter()
                .map(|r| r.iter().map(|v| Cell::from(v.as_str())).collect())
                .collect(),
        ))
    }

    fn insert_row(&self, sql: &str, values: &[String]) -> Result<u64, sqlx::Error> {
        let (name, placeholders) = sql
            .strip_prefix("INSERT INTO `")
            .and_then(|rest| rest.split_once("` VALUES ("))
            .ok_or_else(|| sqlx::Error::Protocol(format!("unexpected statement: {sql}")))?;
        let bound = placeholders.matches('?').count();
        if bound != values.len() {
            return Err(sqlx::Error::Protocol(format!(
                "{bound} placeholders but {} values bound",
                values.len()
            )));
        }
        let mut state = self.state.lock().unwrap();
        let table = state
            .tables
            .get_mut(name)
            .ok_or_else(|| no_such_table(name))?;
        if values.len() != table.columns.len() {
            return Err(sqlx::Error::Protocol(
                "Column count doesn't match value count at row 1".to_string(),
            ));
        }
        table.rows.push(values.to_vec());
        Ok(1)
    }

    fn release(&self) {
        self.state.lock().unwrap().closed += 1;
    }
}

fn no_such_table(name: &str) -> sqlx::Error {
    sqlx::Error::Protocol(format!("Table 'shop.{name}' doesn't exist"))
}

impl Connector for MockDb {
    type Session = MockSession;

    async fn connect(&self) -> Result<MockSession, sqlx::Error> {
        self.open()
    }
}

pub struct MockSession {
    db: MockDb,
}

impl DbSession for MockSession {
    async fn fetch_all(&mut self, sql: &str) -> Result<RecordSet, sqlx::Error> {
        self.db.select(sql)
    }

    async fn insert(&mut self, sql: &str, values: &[String]) -> Result<u64, sqlx::Error> {
        self.db.insert_row(sql, values)
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        self.db.release();
        Ok(())
    }
}
