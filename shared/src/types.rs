use lambda_http::http::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Name of the partition key attribute
pub const STUDENT_ID: &str = "student_id";

/// Schema-less student record, attribute order preserved
pub type Record = Map<String, Value>;

// ========== REQUEST ==========
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub method: Method,
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Read,
    Update,
    Delete,
    Preflight,
    Unsupported,
}

impl Verb {
    pub fn from_method(method: &Method) -> Self {
        match *method {
            Method::POST => Self::Create,
            Method::GET => Self::Read,
            Method::PUT => Self::Update,
            Method::DELETE => Self::Delete,
            Method::OPTIONS => Self::Preflight,
            _ => Self::Unsupported,
        }
    }
}

// ========== RESPONSE BODIES ==========
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub message: String,
    pub student: Record,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
