use std::env;

pub const DEFAULT_TABLE_NAME: &str = "StudentRecords";

/// Runtime settings read once at cold start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    /// Endpoint override for DynamoDB Local
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup("TABLE_NAME")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        let dynamodb_endpoint = lookup("DYNAMODB_ENDPOINT").filter(|url| !url.is_empty());

        Self {
            table_name,
            dynamodb_endpoint,
        }
    }
}
