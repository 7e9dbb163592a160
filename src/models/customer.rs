use serde::{Deserialize, Serialize};

/// A single HATEOAS link as returned by the REST API (`{"href": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// The `_links` block of a customer resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainings: Option<Link>,
}

/// Customer record owned by the remote store.
///
/// Every field is optional: the API does not enforce a schema, and an absent
/// field is displayed as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streetaddress: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<CustomerLinks>,
}

impl Customer {
    pub fn new(firstname: &str, lastname: &str) -> Self {
        Self {
            firstname: Some(firstname.to_string()),
            lastname: Some(lastname.to_string()),
            ..Self::default()
        }
    }

    /// Opaque self reference used to address update/delete calls.
    pub fn self_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.self_link.as_ref())
            .map(|l| l.href.as_str())
    }

    pub fn firstname_str(&self) -> &str {
        self.firstname.as_deref().unwrap_or("")
    }

    pub fn lastname_str(&self) -> &str {
        self.lastname.as_deref().unwrap_or("")
    }
}

/// Customer attached to a training: either embedded (the `gettrainings`
/// listing) or given by its resource href (the shape used on creation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Link(String),
    Embedded(Box<Customer>),
}

impl CustomerRef {
    pub fn embedded(&self) -> Option<&Customer> {
        match self {
            CustomerRef::Embedded(c) => Some(c),
            CustomerRef::Link(_) => None,
        }
    }
}

/// Display name of a customer: `"<firstname> <lastname>"`.
///
/// Absent customer → `""`. A missing name part leaves its slot empty, so
/// `{firstname: "Ann"}` gives `"Ann "`.
pub fn format_name(customer: Option<&Customer>) -> String {
    match customer {
        Some(c) => format!("{} {}", c.firstname_str(), c.lastname_str()),
        None => String::new(),
    }
}
