//! Error types for loading, saving and reloading the list.

use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal failures. None of these are retried; the CLI prints the chain and exits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {} for reading", path.display())]
    OpenRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Also covers contents that are not valid UTF-8.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {} for writing", path.display())]
    OpenWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Buffered data could not be flushed to disk before the file was closed.
    #[error("failed to close {} after writing", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run reload command {}", program.display())]
    Reload {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_path_and_keeps_the_os_error_as_source() {
        let err = Error::OpenRead {
            path: PathBuf::from("/etc/pihole/adlists.list"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "failed to open /etc/pihole/adlists.list for reading"
        );
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "No such file or directory");
    }

    #[test]
    fn config_error_includes_message() {
        let err = Error::Config {
            path: PathBuf::from("config.toml"),
            message: "expected `=`".to_string(),
        };
        assert_eq!(err.to_string(), "invalid config file config.toml: expected `=`");
    }
}
