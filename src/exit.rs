//! Process exit status mapping.
//!
//! Every error maps to exactly one of four statuses based on its
//! [`ErrorKind`]. Values follow `sysexits.h` where one exists.

use crate::error::{ErrorKind, MeshlintError};

/// Anything not classified below.
pub const EXIT_UNKNOWN: i32 = 1;
/// Malformed invocation (`EX_USAGE`).
pub const EXIT_USAGE: i32 = 64;
/// Input could not be read or parsed (`EX_DATAERR`).
pub const EXIT_DATA: i32 = 65;
/// Analysis ran and found issues.
pub const EXIT_ANALYZER_FOUND_ISSUES: i32 = 79;

/// The status for an error kind.
pub fn exit_code_for_kind(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Usage => EXIT_USAGE,
        ErrorKind::Data => EXIT_DATA,
        ErrorKind::AnalyzerFoundIssues => EXIT_ANALYZER_FOUND_ISSUES,
        ErrorKind::Unknown => EXIT_UNKNOWN,
    }
}

/// Classify an error by its type, never its message.
pub fn classify(err: &anyhow::Error) -> ErrorKind {
    if let Some(e) = err.downcast_ref::<MeshlintError>() {
        return match e {
            MeshlintError::Other(inner) => classify(inner),
            other => other.kind(),
        };
    }
    if err.downcast_ref::<clap::Error>().is_some() {
        return ErrorKind::Usage;
    }
    ErrorKind::Unknown
}

/// The process exit status for `err`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    exit_code_for_kind(classify(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use std::collections::HashSet;
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    struct Probe {
        #[arg(long)]
        level: u8,
    }

    fn clap_error() -> clap::Error {
        Probe::try_parse_from(["probe", "--level", "high"]).unwrap_err()
    }

    #[test]
    fn command_parse_is_usage() {
        let err = anyhow::Error::from(MeshlintError::CommandParse {
            message: "bad flag".into(),
        });
        assert_eq!(exit_code(&err), EXIT_USAGE);
        assert_eq!(exit_code(&anyhow::Error::from(clap_error())), EXIT_USAGE);
        Probe::command().debug_assert();
    }

    #[test]
    fn file_parse_is_data() {
        let err = anyhow::Error::from(MeshlintError::FileParse {
            path: PathBuf::from("vs.yaml"),
            message: "bad yaml".into(),
        });
        assert_eq!(exit_code(&err), EXIT_DATA);
    }

    #[test]
    fn analyzer_found_issues_has_its_own_code() {
        let err = anyhow::Error::from(MeshlintError::AnalyzerFoundIssues { count: 3 });
        assert_eq!(exit_code(&err), EXIT_ANALYZER_FOUND_ISSUES);
    }

    #[test]
    fn unrecognized_errors_are_unknown() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), EXIT_UNKNOWN);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(exit_code(&anyhow::Error::from(io)), EXIT_UNKNOWN);
    }

    #[test]
    fn wrapped_errors_classify_by_inner_kind() {
        let inner = anyhow::Error::from(MeshlintError::FileParse {
            path: PathBuf::from("vs.yaml"),
            message: "bad yaml".into(),
        });
        let err = anyhow::Error::from(MeshlintError::Other(inner));
        assert_eq!(exit_code(&err), EXIT_DATA);
    }

    #[test]
    fn classification_does_not_read_messages() {
        let err = anyhow::anyhow!("Failed to parse vs.yaml: Invalid usage");
        assert_eq!(classify(&err), ErrorKind::Unknown);
    }

    #[test]
    fn codes_are_pairwise_distinct() {
        let codes: HashSet<i32> = [
            ErrorKind::Usage,
            ErrorKind::Data,
            ErrorKind::AnalyzerFoundIssues,
            ErrorKind::Unknown,
        ]
        .into_iter()
        .map(exit_code_for_kind)
        .collect();
        assert_eq!(codes.len(), 4);
    }
}
