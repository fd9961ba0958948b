//! Message templates and their constructors.

use std::sync::Arc;

use super::{Level, Message};
use crate::resource::Origin;

/// A diagnostic template.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MessageType {
    /// Stable code, e.g. `IST0101`.
    pub code: &'static str,
    pub name: &'static str,
    pub level: Level,
    pub description: &'static str,
    /// Detail format. Each `{}` is filled with the next parameter.
    pub template: &'static str,
}

impl MessageType {
    /// Fill the template with `parameters` in order.
    ///
    /// Missing parameters render as empty strings and extra parameters are
    /// ignored.
    pub fn format(&self, parameters: &[String]) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut params = parameters.iter();
        let mut pieces = self.template.split("{}").peekable();
        while let Some(piece) = pieces.next() {
            out.push_str(piece);
            if pieces.peek().is_some() {
                if let Some(p) = params.next() {
                    out.push_str(p);
                }
            }
        }
        out
    }

    /// Reference documentation for this message type.
    pub fn documentation_url(&self) -> String {
        format!(
            "https://istio.io/latest/docs/reference/config/analysis/{}/",
            self.code.to_ascii_lowercase()
        )
    }
}

pub static REFERENCED_RESOURCE_NOT_FOUND: MessageType = MessageType {
    code: "IST0101",
    name: "ReferencedResourceNotFound",
    level: Level::Error,
    description: "A resource being referenced does not exist.",
    template: "Referenced {} not found: \"{}\"",
};

pub static INVALID_APPLICATION_UID: MessageType = MessageType {
    code: "IST0144",
    name: "InvalidApplicationUID",
    level: Level::Warning,
    description: "Application pods should not run as user ID (UID) 1337",
    template: "User ID (UID) 1337 is reserved for the sidecar proxy.",
};

/// Every known message type, ordered by code.
pub static ALL_TYPES: &[&MessageType] = &[&REFERENCED_RESOURCE_NOT_FOUND, &INVALID_APPLICATION_UID];

/// `IST0101`: `kind` names what was looked up, `name` the missing value.
pub fn referenced_resource_not_found(
    origin: Arc<dyn Origin>,
    kind: impl Into<String>,
    name: impl Into<String>,
) -> Message {
    Message::new(
        &REFERENCED_RESOURCE_NOT_FOUND,
        Some(origin),
        vec![kind.into(), name.into()],
    )
}

/// `IST0144`.
pub fn invalid_application_uid(origin: Arc<dyn Origin>) -> Message {
    Message::new(&INVALID_APPLICATION_UID, Some(origin), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_fills_placeholders_in_order() {
        let detail = REFERENCED_RESOURCE_NOT_FOUND.format(&[
            "host+subset in destinationrule".to_string(),
            "ratings+v2".to_string(),
        ]);
        assert_eq!(
            detail,
            "Referenced host+subset in destinationrule not found: \"ratings+v2\""
        );
    }

    #[test]
    fn format_tolerates_missing_parameters() {
        let detail = REFERENCED_RESOURCE_NOT_FOUND.format(&["gateway".to_string()]);
        assert_eq!(detail, "Referenced gateway not found: \"\"");
        assert_eq!(INVALID_APPLICATION_UID.format(&[]), INVALID_APPLICATION_UID.template);
    }

    #[test]
    fn codes_are_unique_and_sorted() {
        let codes: Vec<_> = ALL_TYPES.iter().map(|t| t.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn documentation_url_uses_lowercase_code() {
        assert!(INVALID_APPLICATION_UID
            .documentation_url()
            .ends_with("/analysis/ist0144/"));
    }
}
