use super::customer::{Customer, CustomerRef, format_name};
use crate::utils::date::{Timestamp, parse_timestamp};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identity of a training as sent by the API (numeric in practice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Training session, read-only to the pipeline.
///
/// `date` is kept as the raw ISO-8601 string so that a malformed value can
/// degrade to "missing" instead of failing the whole document. Fields of the
/// wrong JSON type (a numeric `date`, a text `duration`) read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    /// Minutes, expected > 0.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer: Option<CustomerRef>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl Training {
    pub fn new(id: i64, date: &str, duration: i64, activity: &str) -> Self {
        Self {
            id: Some(RecordId::Number(id)),
            date: Some(date.to_string()),
            duration: Some(duration),
            activity: Some(activity.to_string()),
            customer: None,
        }
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(CustomerRef::Embedded(Box::new(customer)));
        self
    }

    /// Parsed start instant; `None` when `date` is absent or malformed.
    pub fn start(&self) -> Option<Timestamp> {
        self.date.as_deref().and_then(parse_timestamp)
    }

    pub fn activity_str(&self) -> &str {
        self.activity.as_deref().unwrap_or("")
    }

    /// Embedded customer, if the record carries one.
    pub fn embedded_customer(&self) -> Option<&Customer> {
        self.customer.as_ref().and_then(CustomerRef::embedded)
    }

    pub fn customer_name(&self) -> String {
        format_name(self.embedded_customer())
    }

    /// `"<activity> / <firstname> <lastname>"`.
    pub fn title(&self) -> String {
        format!("{} / {}", self.activity_str(), self.customer_name())
    }

    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}
