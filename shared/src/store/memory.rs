use super::StudentStore;
use crate::error::StudentError;
use crate::types::{Record, STUDENT_ID};
use crate::update_expression::PartialUpdate;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process table for tests and local runs. Mirrors DynamoDB semantics:
/// put replaces, update upserts, delete ignores missing keys.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Record>>, StudentError> {
        self.records
            .lock()
            .map_err(|_| StudentError::Storage("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn put(&self, record: &Record) -> Result<(), StudentError> {
        let student_id = record
            .get(STUDENT_ID)
            .and_then(Value::as_str)
            .ok_or_else(StudentError::missing_key)?;

        self.lock()?.insert(student_id.to_string(), record.clone());
        Ok(())
    }

    async fn get(&self, student_id: &str) -> Result<Option<Record>, StudentError> {
        Ok(self.lock()?.get(student_id).cloned())
    }

    async fn update(
        &self,
        student_id: &str,
        update: &PartialUpdate,
    ) -> Result<Record, StudentError> {
        let mut records = self.lock()?;
        let record = records.entry(student_id.to_string()).or_insert_with(|| {
            let mut record = Record::new();
            record.insert(STUDENT_ID.to_string(), Value::String(student_id.to_string()));
            record
        });

        for (name, value) in update.assignments() {
            record.insert(name.to_string(), value.clone());
        }

        Ok(record.clone())
    }

    async fn delete(&self, student_id: &str) -> Result<(), StudentError> {
        self.lock()?.remove(student_id);
        Ok(())
    }
}
