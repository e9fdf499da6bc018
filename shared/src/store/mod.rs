pub mod attributes;
pub mod dynamo;
pub mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use crate::error::StudentError;
use crate::types::Record;
use crate::update_expression::PartialUpdate;
use async_trait::async_trait;

/// Key-value persistence for student records, addressed by `student_id`.
///
/// No call is conditional: concurrent writers to one key are last-write-wins.
///
/// Attribute order of returned records is backend-specific. `MemoryStore`
/// keeps submission order; `DynamoStore` returns `student_id` first and the
/// remaining attributes sorted by name, since DynamoDB items are unordered.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Unconditional overwrite
    async fn put(&self, record: &Record) -> Result<(), StudentError>;

    /// `None` when no record exists for the key
    async fn get(&self, student_id: &str) -> Result<Option<Record>, StudentError>;

    /// Applies every clause atomically and returns the whole record afterwards
    async fn update(&self, student_id: &str, update: &PartialUpdate)
        -> Result<Record, StudentError>;

    /// Succeeds whether or not the key existed
    async fn delete(&self, student_id: &str) -> Result<(), StudentError>;
}
