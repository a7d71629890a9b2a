// Error types for layout checks.

use std::fmt;

use crate::target::BuildTarget;

/// One type whose measured size differs from its fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMismatch {
    pub type_name: String,
    pub expected: usize,
    pub actual: usize,
    pub target: BuildTarget,
}

impl fmt::Display for LayoutMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sizeof({}) == {} failed on {}: measured {} bytes",
            self.type_name, self.expected, self.target, self.actual
        )
    }
}

/// Error returned by [`check`](crate::check::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// One or more types have the wrong size. Listed in fact-table order.
    Mismatch(Vec<LayoutMismatch>),
    /// A fact names a type nothing was measured for.
    Unmeasured(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Mismatch(list) => {
                write!(f, "{} layout mismatch(es)", list.len())?;
                for m in list {
                    write!(f, "\n  {m}")?;
                }
                Ok(())
            }
            LayoutError::Unmeasured(name) => write!(f, "no measured layout for `{name}`"),
        }
    }
}

impl std::error::Error for LayoutError {}

pub type LayoutResult<T> = Result<T, LayoutError>;
