/// Parameters of the sanity-check query issued when the gateway becomes ready.
///
/// Selects every row of `table` whose JSON column `json_column` has a field
/// `json_field` equal to `value`. The result is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticQuery {
    pub table: String,
    pub json_column: String,
    pub json_field: String,
    pub value: String,
}
