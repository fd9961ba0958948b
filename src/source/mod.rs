//! Where resources come from.
//!
//! [`FileSource`] reads manifests from disk. Each resource carries an
//! [`Origin`](crate::resource::Origin): a [`KubeOrigin`] with a [`Position`]
//! and field line map for manifests, or a [`SyntheticOrigin`] for resources
//! built in memory.

mod fields;
mod file;
mod kube;
mod position;
mod synthetic;

pub use fields::build_fields_map;
pub use file::FileSource;
pub use kube::KubeOrigin;
pub use position::Position;
pub use synthetic::SyntheticOrigin;
