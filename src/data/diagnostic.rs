//! Diagnostic query repository.
//!
//! Runs the operational sanity-check query issued when the gateway becomes ready:
//! every row of a table whose JSON column holds a given value under a given field.

use sea_orm::{
    sea_query::{Alias, Asterisk, Expr, Query, SelectStatement},
    DatabaseConnection, DbErr, FromQueryResult, JsonValue,
};

use crate::model::diagnostic::DiagnosticQuery;

/// Repository running the diagnostic query.
pub struct DiagnosticRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiagnosticRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the diagnostic query and returns the matching rows as JSON objects.
    ///
    /// The field name and value are bound as parameters; the table and column names
    /// are quoted identifiers.
    ///
    /// # Arguments
    /// - `query` - Table, JSON column, field, and value to match
    ///
    /// # Returns
    /// - `Ok(Vec<JsonValue>)` - Matching rows
    /// - `Err(DbErr)` - Table or column missing, or the column is not JSON
    pub async fn run(&self, query: &DiagnosticQuery) -> Result<Vec<JsonValue>, DbErr> {
        let statement = self.db.get_database_backend().build(&select_statement(query));

        JsonValue::find_by_statement(statement).all(self.db).await
    }
}

/// Builds `SELECT * FROM <table> WHERE "<column>" ->> <field> = <value>`.
pub fn select_statement(query: &DiagnosticQuery) -> SelectStatement {
    Query::select()
        .column(Asterisk)
        .from(Alias::new(query.table.as_str()))
        .and_where(Expr::cust_with_values(
            format!("{} ->> ? = ?", quote_identifier(&query.json_column)),
            [query.json_field.clone(), query.value.clone()],
        ))
        .to_owned()
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
