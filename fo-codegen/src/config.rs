// Configuration types for fo-codegen, deserialized from fo.layout.toml.

use std::path::Path;

use serde::Deserialize;

use fo_layout_facts::{Applicability, BuildTarget};

use crate::error::{CodegenError, CodegenResult};

/// Top-level config file.
#[derive(Deserialize, Debug, Clone)]
pub struct FixtureConfig {
    pub fixture: FixtureSection,
    #[serde(default)]
    pub paths: FixturePaths,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    /// Explicit layout table. When empty, the built-in table for
    /// `fixture.revision` is used.
    #[serde(default, rename = "layout")]
    pub layouts: Vec<LayoutEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FixtureSection {
    /// Engine revision tag, e.g. "r476".
    pub revision: String,
    /// Output file stem: `<name>.h`, `<name>.server.args`, ...
    #[serde(default = "default_name")]
    pub name: String,
    /// Name of the C++ function holding the assertions.
    #[serde(default = "default_assert_fn")]
    pub assert_fn: String,
    /// Engine macro used for each assertion.
    #[serde(default = "default_assert_macro")]
    pub assert_macro: String,
    /// Engine headers, included in this order before the assertions.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FixturePaths {
    /// Directory for the C++ header and clang argument files
    /// (relative to the config file location).
    #[serde(default = "default_out")]
    pub cpp_out: String,
    /// Directory for `layout_asserts.rs`.
    #[serde(default = "default_out")]
    pub rust_out: String,
}

impl Default for FixturePaths {
    fn default() -> Self {
        FixturePaths { cpp_out: default_out(), rust_out: default_out() }
    }
}

/// How suppressed warnings reach the compiler.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    /// `-Wno-*` flags in the per-target argument files.
    #[default]
    Flags,
    /// Inline `#pragma GCC diagnostic` push/pop around the header.
    Pragma,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub mode: DiagnosticsMode,
    /// Warning names without the `-W` prefix.
    #[serde(default = "default_suppress")]
    pub suppress: Vec<String>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        DiagnosticsConfig { mode: DiagnosticsMode::default(), suppress: default_suppress() }
    }
}

/// `[[layout]]` entry.
#[derive(Deserialize, Debug, Clone)]
pub struct LayoutEntry {
    #[serde(rename = "type")]
    pub type_name: String,
    pub size: usize,
    #[serde(default)]
    pub target: TargetSelector,
    /// Rust path of the mirror, when it differs from the default mapping.
    #[serde(default)]
    pub rust: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TargetSelector {
    #[default]
    All,
    Server,
    Client,
}

impl From<TargetSelector> for Applicability {
    fn from(sel: TargetSelector) -> Self {
        match sel {
            TargetSelector::All => Applicability::All,
            TargetSelector::Server => Applicability::Only(BuildTarget::Server),
            TargetSelector::Client => Applicability::Only(BuildTarget::Client),
        }
    }
}

fn default_name() -> String {
    "fo".to_string()
}

fn default_assert_fn() -> String {
    "bindgen_static_asserts".to_string()
}

fn default_assert_macro() -> String {
    "STATIC_ASSERT".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["_defines.fos".to_string(), "fonline.h".to_string()]
}

fn default_out() -> String {
    ".".to_string()
}

/// Warnings the engine headers trigger under clang.
pub const DEFAULT_SUPPRESSED: &[&str] = &[
    "macro-redefined",
    "duplicate-decl-specifier",
    "ignored-attributes",
    "logical-op-parentheses",
    "bitwise-op-parentheses",
    "implicit-exception-spec-mismatch",
    "delete-incomplete",
    "nonportable-include-path",
];

fn default_suppress() -> Vec<String> {
    DEFAULT_SUPPRESSED.iter().map(|s| s.to_string()).collect()
}

impl FixtureConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
        Self::parse(&text, path)
    }

    /// Parse config text; `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> CodegenResult<Self> {
        toml::from_str(text).map_err(|e| CodegenError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Config equivalent to the engine's own r476 fixture.
    pub fn builtin() -> Self {
        FixtureConfig {
            fixture: FixtureSection {
                revision: fo_layout_facts::r476::REVISION.to_string(),
                name: default_name(),
                assert_fn: default_assert_fn(),
                assert_macro: default_assert_macro(),
                includes: default_includes(),
            },
            paths: FixturePaths::default(),
            diagnostics: DiagnosticsConfig::default(),
            layouts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> CodegenResult<FixtureConfig> {
        FixtureConfig::parse(text, Path::new("fo.layout.toml"))
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let cfg = parse("[fixture]\nrevision = \"r476\"\n").unwrap();
        assert_eq!(cfg.fixture.name, "fo");
        assert_eq!(cfg.fixture.assert_fn, "bindgen_static_asserts");
        assert_eq!(cfg.fixture.assert_macro, "STATIC_ASSERT");
        assert_eq!(cfg.fixture.includes, ["_defines.fos", "fonline.h"]);
        assert_eq!(cfg.diagnostics.mode, DiagnosticsMode::Flags);
        assert_eq!(cfg.diagnostics.suppress.len(), 8);
        assert_eq!(cfg.paths.cpp_out, ".");
        assert!(cfg.layouts.is_empty());
    }

    #[test]
    fn layout_entries_and_targets() {
        let cfg = parse(
            r#"
            [fixture]
            revision = "r476"

            [diagnostics]
            mode = "pragma"
            suppress = ["macro-redefined"]

            [[layout]]
            type = "Item"
            size = 196
            target = "server"

            [[layout]]
            type = "string"
            size = 28
            rust = "fo_ffi::StdString"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.diagnostics.mode, DiagnosticsMode::Pragma);
        assert_eq!(cfg.layouts.len(), 2);
        assert_eq!(cfg.layouts[0].target, TargetSelector::Server);
        assert_eq!(cfg.layouts[1].target, TargetSelector::All);
        assert_eq!(cfg.layouts[1].rust.as_deref(), Some("fo_ffi::StdString"));
    }

    #[test]
    fn unknown_target_is_a_config_error() {
        let err = parse(
            "[fixture]\nrevision = \"r476\"\n[[layout]]\ntype = \"Item\"\nsize = 1\ntarget = \"both\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Config { .. }), "{err}");
    }

    #[test]
    fn missing_revision_is_a_config_error() {
        assert!(matches!(parse("[fixture]\n"), Err(CodegenError::Config { .. })));
    }

    #[test]
    fn selector_maps_to_applicability() {
        assert_eq!(Applicability::from(TargetSelector::All), Applicability::All);
        assert_eq!(
            Applicability::from(TargetSelector::Client),
            Applicability::Only(BuildTarget::Client)
        );
    }
}
