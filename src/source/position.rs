//! File positions.

use std::fmt;
use std::path::Path;

use crate::resource::Reference;

/// A location in a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    /// Filename, if any.
    pub filename: String,
    /// Line number, starting at 1. Zero means unknown.
    pub line: usize,
}

impl Position {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }

    /// A position is valid when it names a file and a line.
    pub fn is_valid(&self) -> bool {
        self.line > 0 && !self.filename.is_empty()
    }

    // JSON sources are not line-mapped.
    fn tracks_lines(&self) -> bool {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            != Some("json")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename)?;
        if self.is_valid() && self.tracks_lines() {
            write!(f, ":{}", self.line)?;
        }
        Ok(())
    }
}

impl Reference for Position {
    fn render_at_line(&self, line: usize) -> String {
        Position::new(self.filename.clone(), line).to_string()
    }
}
