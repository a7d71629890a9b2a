// Compile-time contract tests: ensure mirror sizes match the engine build.
// These const assertions fail at compile time if sizes drift.

use std::mem::size_of;

use fo_layout_facts::{r476, BuildTarget};

use crate::angelscript::{ScriptArray, ScriptString};
use crate::assert_layout;
use crate::critter::{CrMap, CrVec, Critter};
use crate::game_options::GameOptions;
use crate::item::{client, server};
use crate::stl::{IntSet, IntVec, StdString, Uint16Pair, UintPair};

assert_layout!(UintPair, r476::UINT_PAIR);
assert_layout!(Uint16Pair, r476::UINT16_PAIR);
assert_layout!(StdString, r476::STRING);
assert_layout!(ScriptString, r476::SCRIPT_STRING);
assert_layout!(ScriptArray, r476::SCRIPT_ARRAY);
assert_layout!(IntVec, r476::INT_VEC);
assert_layout!(CrVec, r476::CR_VEC);
assert_layout!(IntSet, r476::INT_SET);
assert_layout!(CrMap, r476::CR_MAP);
assert_layout!(Critter, r476::CRITTER);
assert_layout!(GameOptions, r476::GAME_OPTIONS);

/// Assert the target-dependent layouts for `target`.
///
/// Callable in const context; a wrong size aborts const evaluation with a
/// message naming the type and target. Only the arm for the evaluated
/// target is checked, so a wrong server size still builds the client:
///
/// ```
/// use fo_ffi::BuildTarget;
/// use std::mem::size_of;
///
/// const fn check(target: BuildTarget) {
///     match target {
///         BuildTarget::Server => assert!(size_of::<fo_ffi::server::Item>() == 200),
///         BuildTarget::Client => assert!(size_of::<fo_ffi::client::Item>() == 152),
///     }
/// }
/// const _: () = check(BuildTarget::Client);
/// ```
///
/// and fails to build the server:
///
/// ```compile_fail
/// use fo_ffi::BuildTarget;
/// use std::mem::size_of;
///
/// const fn check(target: BuildTarget) {
///     match target {
///         BuildTarget::Server => assert!(size_of::<fo_ffi::server::Item>() == 200),
///         BuildTarget::Client => assert!(size_of::<fo_ffi::client::Item>() == 152),
///     }
/// }
/// const _: () = check(BuildTarget::Server);
/// ```
pub const fn assert_target_layouts(target: BuildTarget) {
    match target {
        BuildTarget::Server => assert!(
            size_of::<server::Item>() == r476::item(BuildTarget::Server),
            "layout mismatch: `server::Item` expected 196 bytes"
        ),
        BuildTarget::Client => assert!(
            size_of::<client::Item>() == r476::item(BuildTarget::Client),
            "layout mismatch: `client::Item` expected 152 bytes"
        ),
    }
}

const _: () = assert_target_layouts(BuildTarget::Server);
const _: () = assert_target_layouts(BuildTarget::Client);

// Everything the engine hands out by pointer must stay 4-byte aligned.
const _: () = assert!(std::mem::align_of::<Critter>() == 4);
const _: () = assert!(std::mem::align_of::<GameOptions>() == 4);
const _: () = assert!(std::mem::align_of::<server::Item>() == 4);
const _: () = assert!(std::mem::align_of::<client::Item>() == 4);
