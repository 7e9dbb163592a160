//! Loading of the JSON documents returned by the REST API.
//!
//! The HTTP layer is not part of this crate: documents are read from files
//! saved from the `customers` and `gettrainings` endpoints.

use super::customer::Customer;
use super::training::Training;
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A flat JSON record with its keys in document order.
pub type Record = Map<String, Value>;

/// Records of one kind, both raw (for export) and typed (for projection).
#[derive(Debug, Clone, Default)]
pub struct RecordSet<T> {
    pub records: Vec<Record>,
    pub items: Vec<T>,
}

impl<T> RecordSet<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub fn read_document(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Customer listing: a plain array or the HAL form
/// `{"_embedded": {"customers": [...]}}`. A HAL document without the
/// embedded list means "no customers".
pub fn customer_records(doc: Value) -> AppResult<Vec<Record>> {
    match doc {
        Value::Array(items) => into_records("customers", items),
        Value::Object(mut obj) => {
            let embedded = obj
                .remove("_embedded")
                .and_then(|e| match e {
                    Value::Object(mut e) => e.remove("customers"),
                    _ => None,
                })
                .unwrap_or(Value::Null);
            match embedded {
                Value::Array(items) => into_records("customers", items),
                Value::Null => Ok(Vec::new()),
                other => Err(invalid("customers", &other)),
            }
        }
        Value::Null => Ok(Vec::new()),
        other => Err(invalid("customers", &other)),
    }
}

/// Training listing: a plain array; `null` means "no trainings".
pub fn training_records(doc: Value) -> AppResult<Vec<Record>> {
    match doc {
        Value::Array(items) => into_records("trainings", items),
        Value::Null => Ok(Vec::new()),
        other => Err(invalid("trainings", &other)),
    }
}

pub fn load_customers(path: &Path) -> AppResult<RecordSet<Customer>> {
    let records = customer_records(read_document(path)?)?;
    typed(records)
}

pub fn load_trainings(path: &Path) -> AppResult<RecordSet<Training>> {
    let records = training_records(read_document(path)?)?;
    typed(records)
}

/// Build typed items from raw records, keeping both.
pub fn typed<T: DeserializeOwned>(records: Vec<Record>) -> AppResult<RecordSet<T>> {
    let items = records
        .iter()
        .map(|r| serde_json::from_value(Value::Object(r.clone())))
        .collect::<Result<Vec<T>, _>>()?;
    Ok(RecordSet { records, items })
}

fn into_records(kind: &'static str, items: Vec<Value>) -> AppResult<Vec<Record>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(obj) => Ok(obj),
            other => Err(invalid(kind, &other)),
        })
        .collect()
}

fn invalid(kind: &'static str, value: &Value) -> AppError {
    let detail = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    AppError::InvalidDocument {
        kind,
        detail: format!("unexpected {detail}"),
    }
}
