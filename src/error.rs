//! Error type shared by both generators.

use std::io;
use std::path::PathBuf;

/// Everything that can abort a generator run.
#[derive(Debug)]
pub enum GenError {
    /// Input file does not exist (or is not a regular file)
    InputNotFound(PathBuf),
    /// Input file exists but could not be read
    Read { path: PathBuf, source: io::Error },
    /// Output file could not be created, written or moved into place
    Write { path: PathBuf, source: io::Error },
}

impl GenError {
    /// Process exit code for this error.
    ///
    /// A missing input gets its own code so build scripts can tell it apart
    /// from an I/O failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::InputNotFound(_) => 2,
            GenError::Read { .. } | GenError::Write { .. } => 1,
        }
    }
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::InputNotFound(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            GenError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            GenError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::InputNotFound(_) => None,
            GenError::Read { source, .. } | GenError::Write { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_exit_codes_are_distinct() {
        let missing = GenError::InputNotFound(PathBuf::from("nope.bin"));
        let write = GenError::Write {
            path: PathBuf::from("out.h"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(write.exit_code(), 1);
        assert_ne!(missing.exit_code(), 0);
    }

    #[test]
    fn test_display_and_source() {
        let missing = GenError::InputNotFound(PathBuf::from("nope.bin"));
        assert!(missing.to_string().contains("nope.bin"));
        assert!(missing.source().is_none());

        let read = GenError::Read {
            path: PathBuf::from("in.bin"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        let msg = read.to_string();
        assert!(msg.starts_with("Failed to read in.bin"), "got: {}", msg);
        assert!(read.source().is_some());
    }
}
