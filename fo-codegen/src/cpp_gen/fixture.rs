// Assertion header consumed by the bindings generator.

use std::fmt::Write;

use fo_layout_facts::BuildTarget;

use crate::config::DiagnosticsMode;
use crate::context::{FixtureContext, ResolvedFact};

/// Render the fixture header.
///
/// Shared checks come first, then one `#ifdef` block per build target.
/// A guard rejects translation units that define neither or both target
/// macros, so exactly one target block is ever active.
pub fn generate_fixture(ctx: &FixtureContext<'_>) -> String {
    let fixture = &ctx.config.fixture;
    let diagnostics = &ctx.config.diagnostics;
    let pragmas = diagnostics.mode == DiagnosticsMode::Pragma;
    let mut out = String::with_capacity(2048);

    out.push_str(&format!(
        "// @generated by fo-codegen for engine revision {}. Do not edit.\n",
        fixture.revision
    ));
    out.push_str("#define SKIP_PRAGMAS\n");
    if pragmas {
        out.push_str("#pragma GCC diagnostic push\n");
        for warning in &diagnostics.suppress {
            out.push_str(&format!("#pragma GCC diagnostic ignored \"-W{warning}\"\n"));
        }
    }
    for include in &fixture.includes {
        out.push_str(&format!("#include \"{include}\"\n"));
    }

    let [first, second] = BuildTarget::ALL;
    out.push_str(&format!(
        "\n#if defined({a}) == defined({b})\n\
         #error \"define exactly one of {a} or {b}\"\n\
         #endif\n\n",
        a = first.define(),
        b = second.define()
    ));

    out.push_str(&format!("void {}() {{\n", fixture.assert_fn));
    for fact in ctx.shared() {
        push_assert(&mut out, &fixture.assert_macro, fact);
    }
    for target in BuildTarget::ALL {
        let mut facts = ctx.only(target).peekable();
        if facts.peek().is_none() {
            continue;
        }
        out.push_str(&format!("\n#ifdef {}\n", target.define()));
        for fact in facts {
            push_assert(&mut out, &fixture.assert_macro, fact);
        }
        out.push_str("#endif\n");
    }
    out.push_str("}\n");

    if pragmas {
        out.push_str("#pragma GCC diagnostic pop\n");
    }
    out
}

fn push_assert(out: &mut String, assert_macro: &str, fact: &ResolvedFact) {
    let _ = writeln!(out, "    {assert_macro}(sizeof({}) == {});", fact.type_name, fact.size);
}
