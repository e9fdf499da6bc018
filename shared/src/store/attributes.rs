use crate::error::StudentError;
use crate::types::{Record, STUDENT_ID};
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

fn codec_error(err: serde_dynamo::Error) -> StudentError {
    tracing::error!("Attribute conversion failed: {}", err);
    StudentError::Storage(err.to_string())
}

pub fn to_attribute(value: &Value) -> Result<AttributeValue, StudentError> {
    serde_dynamo::to_attribute_value(value).map_err(codec_error)
}

pub fn to_item(record: &Record) -> Result<Item, StudentError> {
    serde_dynamo::to_item::<_, Item>(record).map_err(codec_error)
}

/// Item attributes come back unordered; the key is placed first, the rest
/// sorted by name
pub fn from_item(item: &Item) -> Result<Record, StudentError> {
    let item: Item = item
        .iter()
        .map(|(k, v)| (k.clone(), binary_as_text(v)))
        .collect();
    let record: Record = serde_dynamo::from_item(item).map_err(codec_error)?;

    let mut fields: Vec<(String, Value)> = record.into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| {
        (a.as_str() != STUDENT_ID)
            .cmp(&(b.as_str() != STUDENT_ID))
            .then_with(|| a.cmp(b))
    });
    Ok(fields.into_iter().collect())
}

/// JSON has no byte type; binary attributes read as base64 text
fn binary_as_text(attribute: &AttributeValue) -> AttributeValue {
    match attribute {
        AttributeValue::B(blob) => AttributeValue::S(general_purpose::STANDARD.encode(blob.as_ref())),
        AttributeValue::Bs(blobs) => AttributeValue::Ss(
            blobs
                .iter()
                .map(|blob| general_purpose::STANDARD.encode(blob.as_ref()))
                .collect(),
        ),
        AttributeValue::L(items) => AttributeValue::L(items.iter().map(binary_as_text).collect()),
        AttributeValue::M(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), binary_as_text(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
