// Name mapping between engine (C++) types and their Rust mirrors.

use fo_layout_facts::Applicability;

/// Engine types whose mirror has a different Rust name.
const RENAMED: &[(&str, &str)] = &[("string", "StdString"), ("std::string", "StdString")];

/// Default path of the fo-ffi mirror for an engine type.
///
/// Target-specific facts resolve into the target module, e.g. a
/// server-only `Item` maps to `fo_ffi::server::Item`.
pub fn rust_mirror_path(type_name: &str, applies: Applicability) -> String {
    let name = RENAMED
        .iter()
        .find(|(engine, _)| *engine == type_name)
        .map(|(_, rust)| *rust)
        .unwrap_or(type_name);
    match applies {
        Applicability::All => format!("fo_ffi::{name}"),
        Applicability::Only(target) => format!("fo_ffi::{}::{name}", target.name()),
    }
}

/// Whether `name` can be spliced into `sizeof(...)` as-is: a C++ type name,
/// optionally qualified or templated.
pub fn is_engine_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    let mut depth = 0i32;
    for c in name.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            c if c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | ',' | ' ' | '*') => {}
            _ => return false,
        }
    }
    depth == 0
}

/// Whether `path` is a plain `a::b::C` Rust path, usable as a type in
/// generated code without further translation.
pub fn is_plain_rust_path(path: &str) -> bool {
    !path.is_empty() && path.split("::").all(is_c_identifier)
}

/// `[A-Za-z_][A-Za-z0-9_]*`, valid as both a C and a Rust identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Clang warning name without the `-W` prefix, e.g. `macro-redefined`.
pub fn is_warning_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Header path that can sit between the quotes of an `#include`.
pub fn is_include_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fo_layout_facts::BuildTarget;

    #[test]
    fn shared_types_map_to_crate_root() {
        assert_eq!(rust_mirror_path("Critter", Applicability::All), "fo_ffi::Critter");
        assert_eq!(rust_mirror_path("string", Applicability::All), "fo_ffi::StdString");
    }

    #[test]
    fn target_types_map_to_target_module() {
        assert_eq!(
            rust_mirror_path("Item", Applicability::Only(BuildTarget::Server)),
            "fo_ffi::server::Item"
        );
        assert_eq!(
            rust_mirror_path("Item", Applicability::Only(BuildTarget::Client)),
            "fo_ffi::client::Item"
        );
    }

    #[test]
    fn accepts_engine_spellings() {
        assert!(is_engine_type_name("ScriptString"));
        assert!(is_engine_type_name("std::map<uint, Critter*>"));
        assert!(is_engine_type_name("_Tree"));
    }

    #[test]
    fn rejects_injection_and_garbage() {
        assert!(!is_engine_type_name(""));
        assert!(!is_engine_type_name("1Item"));
        assert!(!is_engine_type_name("Item) == 0); //"));
        assert!(!is_engine_type_name("vector<int"));
        assert!(!is_engine_type_name("a>b<"));
    }

    #[test]
    fn plain_rust_paths() {
        assert!(is_plain_rust_path("fo_ffi::server::Item"));
        assert!(is_plain_rust_path("StdString"));
        assert!(!is_plain_rust_path("fo_ffi::std::vector<int>"));
        assert!(!is_plain_rust_path("fo_ffi::Critter*"));
        assert!(!is_plain_rust_path("fo_ffi::unsigned int"));
        assert!(!is_plain_rust_path("fo_ffi::"));
        assert!(!is_plain_rust_path(""));
    }

    #[test]
    fn header_token_character_sets() {
        assert!(is_c_identifier("STATIC_ASSERT"));
        assert!(!is_c_identifier("bad name"));
        assert!(!is_c_identifier("9lives"));
        assert!(is_warning_name("implicit-exception-spec-mismatch"));
        assert!(!is_warning_name("macro-redefined\"\n#define X"));
        assert!(!is_warning_name("-Wall"));
        assert!(is_include_path("engine/_defines.fos"));
        assert!(!is_include_path("fonline.h\""));
        assert!(!is_include_path(""));
    }
}
