//! The uniform resource wrapper and its two translation paths.
//!
//! - [`Instance::from_object`] takes an object that exposes metadata
//!   accessors together with an already-typed payload.
//! - [`Instance::from_config`] takes a type-erased record that only carries
//!   a raw spec, which is decoded through the schema.
//!
//! Both produce the same [`Metadata`] shape.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::metadata::{Metadata, Version};
use super::name::FullName;
use super::origin::Origin;
use super::schema::Schema;
use super::spec::Spec;
use super::Gvk;
use crate::error::{MeshlintError, Result};

/// Metadata accessors of an object read from a cluster or manifest.
pub trait ObjectMeta {
    fn name(&self) -> &str;
    fn namespace(&self) -> &str;
    fn creation_timestamp(&self) -> Option<DateTime<Utc>>;
    fn resource_version(&self) -> &str;
    fn labels(&self) -> &BTreeMap<String, String>;
    fn annotations(&self) -> &BTreeMap<String, String>;
}

/// The `metadata` block of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMetadata {
    pub name: String,
    pub namespace: String,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub resource_version: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta for ObjectMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn creation_timestamp(&self) -> Option<DateTime<Utc>> {
        self.creation_timestamp
    }

    fn resource_version(&self) -> &str {
        &self.resource_version
    }

    fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }
}

/// A configuration record with no typed payload, only a raw spec.
#[derive(Debug, Clone, Default)]
pub struct ConfigRecord {
    pub meta: ObjectMetadata,
    pub spec: serde_yaml::Value,
}

/// One resource: metadata, origin, and typed payload.
#[derive(Debug, Clone)]
pub struct Instance {
    pub metadata: Metadata,
    pub origin: Arc<dyn Origin>,
    pub message: Spec,
}

impl Instance {
    /// Translate an object and its typed payload.
    ///
    /// Fails if `spec` is not the payload type `schema` declares.
    pub fn from_object(
        object: &dyn ObjectMeta,
        spec: Spec,
        schema: &Schema,
        origin: Arc<dyn Origin>,
    ) -> Result<Instance> {
        let metadata = metadata_from(object, schema);
        if !schema.accepts(&spec) {
            return Err(MeshlintError::InvalidPayload {
                gvk: schema.gvk,
                name: metadata.full_name,
                message: format!("payload is a {}", spec.gvk().kind),
            });
        }
        Ok(Instance {
            metadata,
            origin,
            message: spec,
        })
    }

    /// Translate a type-erased config record, decoding its spec.
    pub fn from_config(
        record: &ConfigRecord,
        schema: &Schema,
        origin: Arc<dyn Origin>,
    ) -> Result<Instance> {
        let metadata = metadata_from(&record.meta, schema);
        let message = schema
            .decode_spec(record.spec.clone())
            .map_err(|e| MeshlintError::InvalidPayload {
                gvk: schema.gvk,
                name: metadata.full_name.clone(),
                message: e.to_string(),
            })?;
        Ok(Instance {
            metadata,
            origin,
            message,
        })
    }

    /// The type of this resource.
    pub fn gvk(&self) -> Gvk {
        self.metadata.schema.gvk
    }

    pub fn full_name(&self) -> &FullName {
        &self.metadata.full_name
    }
}

fn metadata_from(object: &dyn ObjectMeta, schema: &Schema) -> Metadata {
    Metadata {
        schema: *schema,
        full_name: FullName::new(object.namespace(), object.name()),
        create_time: object.creation_timestamp(),
        version: Version::new(object.resource_version()),
        labels: object.labels().clone(),
        annotations: object.annotations().clone(),
    }
}
