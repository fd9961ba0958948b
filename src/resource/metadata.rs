//! Per-resource metadata.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

use super::name::FullName;
use super::schema::Schema;

/// Opaque token that changes when a resource's content changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attributes of a resource, kept apart from its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub schema: Schema,
    pub full_name: FullName,
    pub create_time: Option<DateTime<Utc>>,
    pub version: Version,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}
