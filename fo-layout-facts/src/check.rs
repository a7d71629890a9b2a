// Runtime comparison of layout facts against measured sizes.
//
// The compile-time assertions in fo-ffi stop the build on the first bad
// mirror; this pass reports every mismatch at once, which is what the CLI
// and the fixture generator's self-test want.

use crate::error::{LayoutError, LayoutMismatch, LayoutResult};
use crate::fact::{facts_for, LayoutFact, MeasuredLayout};
use crate::target::BuildTarget;

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub target: BuildTarget,
    /// Number of facts compared.
    pub checked: usize,
}

/// Compare every fact applicable to `target` against `measured`.
///
/// Measurements for types without a fact are ignored. A fact without a
/// measurement is an error, since the check could not be performed.
pub fn check(
    facts: &[LayoutFact<'_>],
    measured: &[MeasuredLayout<'_>],
    target: BuildTarget,
) -> LayoutResult<CheckReport> {
    let mut mismatches = Vec::new();
    let mut checked = 0;

    for fact in facts_for(facts, target) {
        let Some(m) = measured.iter().find(|m| m.type_name == fact.type_name) else {
            return Err(LayoutError::Unmeasured(fact.type_name.to_string()));
        };
        checked += 1;
        if m.size != fact.size {
            mismatches.push(LayoutMismatch {
                type_name: fact.type_name.to_string(),
                expected: fact.size,
                actual: m.size,
                target,
            });
        }
    }

    if mismatches.is_empty() {
        Ok(CheckReport { target, checked })
    } else {
        Err(LayoutError::Mismatch(mismatches))
    }
}
