//! Diagnostic messages.
//!
//! A [`MessageType`] is a static template with a stable code such as
//! `IST0101`. A [`Message`] instantiates it for one resource: template
//! parameters, the resource's [`Origin`], and an optional line override
//! pointing at the offending field. Building a message is pure, so equal
//! inputs give equal messages.

mod level;
mod message;
mod types;

pub use level::Level;
pub use message::{Diagnostic, Message};
pub use types::{
    invalid_application_uid, referenced_resource_not_found, MessageType, ALL_TYPES,
    INVALID_APPLICATION_UID, REFERENCED_RESOURCE_NOT_FOUND,
};
