//! VB-002: Error type shared by the loader, assembler, and CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a compile before the document is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("{count} validation error(s): {}", .messages.join("; "))]
    Invalid { count: usize, messages: Vec<String> },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vb002_invalid_message_lists_all() {
        let e = Error::Invalid {
            count: 2,
            messages: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(e.to_string(), "2 validation error(s): a; b");
    }

    #[test]
    fn test_vb002_read_mentions_path() {
        let e = Error::Read {
            path: PathBuf::from("/no/such/tasks.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/no/such/tasks.yaml"));
        assert!(msg.contains("gone"));
    }
}
