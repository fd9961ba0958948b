//! Resource model.
//!
//! Every configuration object, whatever its type, is represented as an
//! [`Instance`]: [`Metadata`] about the object, an [`Origin`] saying where it
//! came from, and a typed [`Spec`] payload selected by the object's [`Gvk`].
//!
//! # Example
//!
//! ```
//! use meshlint::resource::{gvk, FullName, Gvk, Schemas};
//!
//! let schema = Schemas::builtin().find_by_kind("networking.istio.io/v1beta1", "VirtualService").unwrap();
//! assert_eq!(schema.gvk, gvk::VIRTUAL_SERVICE);
//! assert_eq!(FullName::new("default", "reviews").to_string(), "default/reviews");
//! assert_eq!(Gvk::from_type_url("core/v1/Pod"), Some(gvk::POD));
//! ```

pub mod gvk;
pub mod instance;
pub mod metadata;
pub mod name;
pub mod origin;
pub mod schema;
pub mod spec;

pub use gvk::Gvk;
pub use instance::{ConfigRecord, Instance, ObjectMeta, ObjectMetadata};
pub use metadata::{Metadata, Version};
pub use name::{FullName, LocalName, Namespace};
pub use origin::{ClusterId, FieldsMap, Origin, Reference};
pub use schema::{Schema, Schemas};
pub use spec::Spec;
