//! Reads back the statements a `MockDatabase` connection was asked to run.

use sea_orm::{DatabaseConnection, Value};

#[derive(Debug, Clone)]
pub struct LoggedStatement {
    pub sql: String,
    pub values: Vec<Value>,
}

impl LoggedStatement {
    pub fn binds(&self, value: impl Into<Value>) -> bool {
        self.values.contains(&value.into())
    }
}

/// Drains the log, so call it once per connection after the code under test ran.
pub fn logged_statements(db: &DatabaseConnection) -> Vec<LoggedStatement> {
    db.clone()
        .into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().to_vec())
        .map(|stmt| LoggedStatement {
            sql: stmt.sql,
            values: stmt.values.map(|v| v.0).unwrap_or_default(),
        })
        .collect()
}
