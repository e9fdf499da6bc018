use super::attributes::{from_item, to_attribute, to_item};
use super::StudentStore;
use crate::error::StudentError;
use crate::types::{Record, STUDENT_ID};
use crate::update_expression::PartialUpdate;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

/// Student table with `student_id` (S) as its only key
pub struct DynamoStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn storage_error<E: std::error::Error>(err: E) -> StudentError {
    let message = DisplayErrorContext(err).to_string();
    tracing::error!("DynamoDB call failed: {}", message);
    StudentError::Storage(message)
}

fn key(student_id: &str) -> AttributeValue {
    AttributeValue::S(student_id.to_string())
}

#[async_trait]
impl StudentStore for DynamoStore {
    async fn put(&self, record: &Record) -> Result<(), StudentError> {
        tracing::debug!("put_item into {}", self.table_name);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)?))
            .send()
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn get(&self, student_id: &str) -> Result<Option<Record>, StudentError> {
        tracing::debug!("get_item {} from {}", student_id, self.table_name);

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(STUDENT_ID, key(student_id))
            .send()
            .await
            .map_err(storage_error)?;

        result.item().map(from_item).transpose()
    }

    async fn update(
        &self,
        student_id: &str,
        update: &PartialUpdate,
    ) -> Result<Record, StudentError> {
        tracing::debug!(
            "update_item {} in {} ({} fields)",
            student_id,
            self.table_name,
            update.clauses.len()
        );

        let values = update
            .values
            .iter()
            .map(|(alias, value)| Ok((alias.clone(), to_attribute(value)?)))
            .collect::<Result<HashMap<String, AttributeValue>, StudentError>>()?;

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(STUDENT_ID, key(student_id))
            .update_expression(update.expression())
            .set_expression_attribute_names(Some(update.names.clone()))
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(storage_error)?;

        let attributes = result
            .attributes()
            .ok_or_else(|| StudentError::Storage("update returned no attributes".to_string()))?;
        from_item(attributes)
    }

    async fn delete(&self, student_id: &str) -> Result<(), StudentError> {
        tracing::debug!("delete_item {} from {}", student_id, self.table_name);

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(STUDENT_ID, key(student_id))
            .send()
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}
