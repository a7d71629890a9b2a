// Printable and serializable views of check results and fact tables.

use std::fmt::Write;

use serde::Serialize;

use fo_codegen::context::FixtureContext;
use fo_layout_facts::{
    check, facts_for, BuildTarget, CheckReport, LayoutError, LayoutFact, LayoutResult,
    MeasuredLayout,
};

#[derive(Serialize, Debug)]
pub struct MismatchRow {
    #[serde(rename = "type")]
    pub type_name: String,
    pub expected: usize,
    pub actual: usize,
}

#[derive(Serialize, Debug)]
pub struct CheckOutput {
    pub revision: String,
    pub target: String,
    pub ok: bool,
    pub checked: usize,
    pub mismatches: Vec<MismatchRow>,
}

impl CheckOutput {
    /// `applicable` is the number of facts that apply to `target`; every
    /// one of them was compared when the result is a mismatch.
    pub fn new(
        revision: &str,
        target: BuildTarget,
        applicable: usize,
        result: &LayoutResult<CheckReport>,
    ) -> Self {
        let (checked, mismatches) = match result {
            Ok(report) => (report.checked, Vec::new()),
            Err(LayoutError::Mismatch(list)) => (
                applicable,
                list.iter()
                    .map(|m| MismatchRow {
                        type_name: m.type_name.clone(),
                        expected: m.expected,
                        actual: m.actual,
                    })
                    .collect(),
            ),
            Err(LayoutError::Unmeasured(_)) => (0, Vec::new()),
        };
        CheckOutput {
            revision: revision.to_string(),
            target: target.to_string(),
            ok: result.is_ok(),
            checked,
            mismatches,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.ok {
            let _ = writeln!(
                out,
                "{} {}: OK, {} layouts match",
                self.revision, self.target, self.checked
            );
        } else {
            let _ = writeln!(
                out,
                "{} {}: FAILED, {} mismatch(es)",
                self.revision,
                self.target,
                self.mismatches.len()
            );
            for m in &self.mismatches {
                let _ = writeln!(
                    out,
                    "  {}: expected {} bytes, measured {}",
                    m.type_name, m.expected, m.actual
                );
            }
        }
        out
    }
}

/// Compare `facts` with `measured` for `target`.
///
/// Mismatches are part of the report; only a fact that nothing was measured
/// for is an error.
pub fn check_layouts(
    revision: &str,
    facts: &[LayoutFact<'_>],
    measured: &[MeasuredLayout<'_>],
    target: BuildTarget,
) -> Result<CheckOutput, LayoutError> {
    let result = check(facts, measured, target);
    if let Err(LayoutError::Unmeasured(name)) = &result {
        return Err(LayoutError::Unmeasured(name.clone()));
    }
    let applicable = facts_for(facts, target).count();
    Ok(CheckOutput::new(revision, target, applicable, &result))
}

#[derive(Serialize, Debug)]
pub struct FactRow {
    #[serde(rename = "type")]
    pub type_name: String,
    pub size: usize,
    pub applies: &'static str,
    pub rust: String,
}

/// Facts applicable to `target`, in table order.
pub fn fact_rows(ctx: &FixtureContext<'_>, target: BuildTarget) -> Vec<FactRow> {
    ctx.facts
        .iter()
        .filter(|f| f.applies.applies_to(target))
        .map(|f| FactRow {
            type_name: f.type_name.clone(),
            size: f.size,
            applies: f.applies.name(),
            rust: f.rust_path.clone(),
        })
        .collect()
}
