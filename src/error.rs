use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum GlobetrotterError {
    #[error("Invalid range on {entity} {id}: end {end} precedes start {start}")]
    InvalidRange {
        entity: &'static str,
        id: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Invalid amount on {entity} {id}: {field} is {value}")]
    InvalidAmount {
        entity: &'static str,
        id: String,
        field: &'static str,
        value: Decimal,
    },

    #[error("Malformed record in {table} at row {index}: {reason}")]
    MalformedRecord {
        table: String,
        index: usize,
        reason: String,
    },

    #[error("Unrecognized trip status: {0}")]
    UnrecognizedStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, GlobetrotterError>;
