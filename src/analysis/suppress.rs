//! Message suppression.
//!
//! A suppression pairs a message code with a glob over the resource's
//! friendly name, e.g. `IST0101=VirtualService default/*`.

use regex::Regex;

use crate::msg::Message;

/// One compiled suppression rule.
#[derive(Debug, Clone)]
pub struct Suppression {
    code: String,
    resource: Regex,
}

impl Suppression {
    /// Compile a rule. `*` in `resource` matches any run of characters.
    pub fn new(code: impl Into<String>, resource: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            code: code.into(),
            resource: Regex::new(&glob_to_regex(resource))?,
        })
    }

    /// Parse `CODE=RESOURCE`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let (code, resource) = s
            .split_once('=')
            .ok_or_else(|| format!("expected CODE=RESOURCE, got '{}'", s))?;
        let code = code.trim();
        if code.is_empty() {
            return Err(format!("missing message code in '{}'", s));
        }
        Self::new(code, resource.trim()).map_err(|e| e.to_string())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn matches(&self, message: &Message) -> bool {
        message.code() == self.code && self.resource.is_match(&message.resource_name())
    }
}

fn glob_to_regex(glob: &str) -> String {
    let parts: Vec<String> = glob.split('*').map(regex::escape).collect();
    format!("^{}$", parts.join(".*"))
}

/// Whether any rule in `rules` suppresses `message`.
pub fn is_suppressed(rules: &[Suppression], message: &Message) -> bool {
    rules.iter().any(|s| s.matches(message))
}
