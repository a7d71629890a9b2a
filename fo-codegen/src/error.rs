// Error types for fo-codegen.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CodegenError {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: std::io::Error },
    /// The fixture config could not be parsed.
    Config { path: PathBuf, message: String },
    /// The layout table is unusable (duplicates, zero sizes, no table).
    InvalidFacts(String),
    /// Generated output failed post-generation checks.
    Verify(Vec<String>),
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io { path: path.into(), source }
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            CodegenError::Config { path, message } => {
                write!(f, "failed to parse {}: {message}", path.display())
            }
            CodegenError::InvalidFacts(msg) => write!(f, "invalid layout facts: {msg}"),
            CodegenError::Verify(errors) => {
                write!(f, "output verification failed")?;
                for e in errors {
                    write!(f, "\n  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type CodegenResult<T> = Result<T, CodegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = CodegenError::io(
            "out/fo.h",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("out/fo.h: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn verify_lists_each_problem() {
        let err = CodegenError::Verify(vec!["missing a".into(), "empty b".into()]);
        assert_eq!(err.to_string(), "output verification failed\n  - missing a\n  - empty b");
    }
}
