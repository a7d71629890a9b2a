// Generates layout_asserts.rs.

use std::fmt::Write;

use fo_layout_facts::BuildTarget;

use crate::context::FixtureContext;

/// Render a module of compile-time checks.
///
/// Shared facts become `fo_ffi::assert_layout!` invocations. Target facts
/// go into `assert_target_layouts`, a `const fn` with one match arm per
/// `BuildTarget`, evaluated for every target at the end of the module.
pub fn generate_asserts(ctx: &FixtureContext<'_>) -> String {
    let mut out = String::with_capacity(2048);
    let _ = writeln!(
        out,
        "// @generated by fo-codegen for engine revision {}. Do not edit.",
        ctx.config.fixture.revision
    );
    out.push_str("#![allow(dead_code, clippy::all)]\n\n");

    for fact in ctx.shared() {
        let _ = writeln!(out, "fo_ffi::assert_layout!({}, {});", fact.rust_path, fact.size);
    }

    out.push_str("\npub const fn assert_target_layouts(target: fo_ffi::BuildTarget) {\n");
    out.push_str("    match target {\n");
    for target in BuildTarget::ALL {
        let mut facts = ctx.only(target).peekable();
        if facts.peek().is_none() {
            let _ = writeln!(out, "        fo_ffi::BuildTarget::{target:?} => {{}}");
            continue;
        }
        let _ = writeln!(out, "        fo_ffi::BuildTarget::{target:?} => {{");
        for fact in facts {
            let _ = writeln!(
                out,
                "            assert!(\n                \
                 ::core::mem::size_of::<{path}>() == {size},\n                \
                 \"layout mismatch: `{name}` expected {size} bytes on {target}\"\n            \
                 );",
                path = fact.rust_path,
                size = fact.size,
                name = fact.type_name,
            );
        }
        out.push_str("        }\n");
    }
    out.push_str("    }\n}\n\n");

    for target in BuildTarget::ALL {
        let _ = writeln!(
            out,
            "const _: () = assert_target_layouts(fo_ffi::BuildTarget::{target:?});"
        );
    }
    out
}
