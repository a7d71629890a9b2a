// Clang arguments for running the bindings generator over the fixture.

use fo_layout_facts::BuildTarget;

use crate::config::DiagnosticsMode;
use crate::context::FixtureContext;

/// Arguments that parse the engine headers as 32-bit C++ for `target`.
///
/// In `flags` mode the suppressed warnings are passed here instead of
/// being embedded in the header.
pub fn clang_args(ctx: &FixtureContext<'_>, target: BuildTarget) -> Vec<String> {
    let mut args = vec![
        "-xc++".to_string(),
        "-m32".to_string(),
        format!("-D{}", target.define()),
    ];
    let diagnostics = &ctx.config.diagnostics;
    if diagnostics.mode == DiagnosticsMode::Flags {
        args.extend(diagnostics.suppress.iter().map(|w| format!("-Wno-{w}")));
    }
    args
}
