use crate::error::AppError;
use std::fmt;

/// MySQL limit on identifier length.
pub const MAX_IDENT_LEN: usize = 64;

/// A validated table name, optionally qualified as `schema.table`.
///
/// Only plain identifiers are accepted and they are always emitted back-quoted,
/// so user input never reaches the SQL text unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHandle {
    schema: Option<String>,
    name: String,
}

impl TableHandle {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::EmptyTableName);
        }
        let invalid = || AppError::InvalidTableName(input.to_string());

        let (schema, name) = match input.split_once('.') {
            Some((schema, name)) => (Some(schema), name),
            None => (None, input),
        };
        if !validate_ident(name) || !schema.is_none_or(validate_ident) {
            return Err(invalid());
        }

        Ok(Self {
            schema: schema.map(str::to_string),
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Back-quoted form for use in SQL text.
    pub fn quoted(&self) -> String {
        match &self.schema {
            Some(schema) => format!("`{schema}`.`{}`", self.name),
            None => format!("`{}`", self.name),
        }
    }

    pub fn select_all_sql(&self) -> String {
        format!("SELECT * FROM {}", self.quoted())
    }

    /// `INSERT INTO <table> VALUES (?, ?, ...)` with one placeholder per value.
    pub fn insert_sql(&self, arity: usize) -> String {
        let placeholders = vec!["?"; arity].join(", ");
        format!("INSERT INTO {} VALUES ({placeholders})", self.quoted())
    }
}

impl fmt::Display for TableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

fn validate_ident(ident: &str) -> bool {
    if ident.is_empty() || ident.len() > MAX_IDENT_LEN {
        return false;
    }
    // All digits is legal when quoted but almost always a typo.
    if ident.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    ident
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
