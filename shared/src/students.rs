use crate::error::StudentError;
use crate::response;
use crate::store::StudentStore;
use crate::types::{
    MessageResponse, NormalizedRequest, Record, StudentResponse, Verb, STUDENT_ID,
};
use crate::update_expression::PartialUpdate;
use lambda_http::{Body, Error, Response};
use serde_json::Value;

/// Route a normalized request and format whatever comes back
pub async fn dispatch(
    store: &dyn StudentStore,
    request: &NormalizedRequest,
) -> Result<Response<Body>, Error> {
    response::from_outcome(handle(store, request).await)
}

/// Run the verb for the request's method
pub async fn handle(
    store: &dyn StudentStore,
    request: &NormalizedRequest,
) -> Result<Value, StudentError> {
    match Verb::from_method(&request.method) {
        Verb::Create => create_student(store, &request.body).await,
        Verb::Read => get_student(store, query_key(request)?).await,
        Verb::Update => update_student(store, &request.body).await,
        Verb::Delete => delete_student(store, query_key(request)?).await,
        Verb::Preflight => Ok(Value::Object(Default::default())),
        Verb::Unsupported => Err(StudentError::MethodNotAllowed),
    }
}

/// Create or overwrite a record
pub async fn create_student(store: &dyn StudentStore, body: &Value) -> Result<Value, StudentError> {
    let record = body_record(body)?;
    let student_id = record_key(record)?;

    store.put(record).await?;
    tracing::info!("Stored student {}", student_id);

    to_value(StudentResponse {
        message: "Student record created".to_string(),
        student: record.clone(),
    })
}

pub async fn get_student(store: &dyn StudentStore, student_id: &str) -> Result<Value, StudentError> {
    store
        .get(student_id)
        .await?
        .map(Value::Object)
        .ok_or(StudentError::NotFound)
}

/// Merge the submitted fields into the stored record
pub async fn update_student(store: &dyn StudentStore, body: &Value) -> Result<Value, StudentError> {
    let record = body_record(body)?;
    let student_id = record_key(record)?;
    let update = PartialUpdate::from_fields(record)?;

    let student = store.update(student_id, &update).await?;
    tracing::info!(
        "Updated student {} fields {:?}",
        student_id,
        update.field_names().collect::<Vec<_>>()
    );

    to_value(StudentResponse {
        message: "Student record updated".to_string(),
        student,
    })
}

pub async fn delete_student(
    store: &dyn StudentStore,
    student_id: &str,
) -> Result<Value, StudentError> {
    store.delete(student_id).await?;
    tracing::info!("Deleted student {}", student_id);

    to_value(MessageResponse {
        message: format!("Student {} deleted", student_id),
    })
}

fn body_record(body: &Value) -> Result<&Record, StudentError> {
    body.as_object().ok_or_else(|| {
        StudentError::Validation("request body must be a JSON object".to_string())
    })
}

fn record_key(record: &Record) -> Result<&str, StudentError> {
    record
        .get(STUDENT_ID)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(StudentError::missing_key)
}

fn query_key(request: &NormalizedRequest) -> Result<&str, StudentError> {
    request
        .query
        .get(STUDENT_ID)
        .map(String::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(StudentError::missing_key)
}

fn to_value<T: serde::Serialize>(body: T) -> Result<Value, StudentError> {
    serde_json::to_value(body).map_err(|e| StudentError::Storage(e.to_string()))
}
