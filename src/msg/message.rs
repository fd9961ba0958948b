use std::fmt;
use std::sync::Arc;

use super::{Level, MessageType};
use crate::resource::{Gvk, Origin};

/// One instantiated diagnostic.
#[derive(Debug, Clone)]
pub struct Message {
    pub message_type: &'static MessageType,
    pub parameters: Vec<String>,
    /// The resource the message is about.
    pub origin: Option<Arc<dyn Origin>>,
    /// Line of the offending field, overriding the resource's own line.
    pub line: Option<usize>,
    /// Appended to the documentation URL as `?ref=`.
    pub doc_ref: Option<String>,
}

impl Message {
    pub fn new(
        message_type: &'static MessageType,
        origin: Option<Arc<dyn Origin>>,
        parameters: Vec<String>,
    ) -> Self {
        Self {
            message_type,
            parameters,
            origin,
            line: None,
            doc_ref: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_doc_ref(mut self, doc_ref: impl Into<String>) -> Self {
        self.doc_ref = Some(doc_ref.into());
        self
    }

    pub fn code(&self) -> &'static str {
        self.message_type.code
    }

    pub fn level(&self) -> Level {
        self.message_type.level
    }

    /// The filled-in template.
    pub fn detail(&self) -> String {
        self.message_type.format(&self.parameters)
    }

    /// Friendly name of the resource, or empty.
    pub fn resource_name(&self) -> String {
        self.origin
            .as_ref()
            .map(|o| o.friendly_name())
            .unwrap_or_default()
    }

    /// The rendered source locator, honoring the line override.
    pub fn reference(&self) -> Option<String> {
        let reference = self.origin.as_ref()?.reference()?;
        Some(match self.line {
            Some(line) => reference.render_at_line(line),
            None => reference.to_string(),
        })
    }

    pub fn documentation_url(&self) -> String {
        let url = self.message_type.documentation_url();
        match &self.doc_ref {
            Some(r) => format!("{}?ref={}", url, r),
            None => url,
        }
    }

    /// Key ordering messages by resource, then code, then content.
    pub fn sort_key(&self) -> (String, &'static str, String, usize) {
        let comparator = self
            .origin
            .as_ref()
            .map(|o| o.comparator())
            .unwrap_or_default();
        (
            comparator,
            self.code(),
            self.detail(),
            self.line.unwrap_or_default(),
        )
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.message_type, other.message_type)
            && self.parameters == other.parameters
            && self.line == other.line
            && self.doc_ref == other.doc_ref
            && self.resource_name() == other.resource_name()
            && self.reference() == other.reference()
    }
}

impl Eq for Message {}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.level(), self.code())?;
        if let Some(origin) = &self.origin {
            write!(f, " ({}", origin.friendly_name())?;
            if let Some(reference) = self.reference() {
                write!(f, " {}", reference)?;
            }
            f.write_str(")")?;
        }
        write!(f, " {}", self.detail())
    }
}

/// A reported message together with the resource type it was reported for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub gvk: Gvk,
    pub message: Message,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}
