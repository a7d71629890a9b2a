// Layout facts for engine revision r476 (32-bit build).
//
// Every size here is asserted at compile time against the fo-ffi mirrors
// and emitted into the C++ fixture header by fo-codegen.

use crate::fact::LayoutFact;
use crate::target::BuildTarget;

/// Revision tag these facts belong to.
pub const REVISION: &str = "r476";

pub const UINT_PAIR: usize = 8;
pub const UINT16_PAIR: usize = 4;
/// `std::string` as shipped with the engine's runtime.
pub const STRING: usize = 28;
pub const SCRIPT_STRING: usize = 36;
pub const SCRIPT_ARRAY: usize = 28;
pub const INT_VEC: usize = 16;
pub const CR_VEC: usize = 16;
pub const INT_SET: usize = 16;
pub const CR_MAP: usize = 16;
pub const CRITTER: usize = 9336;
pub const GAME_OPTIONS: usize = 1072;

/// `sizeof(Item)`; the server build carries extra members.
pub const fn item(target: BuildTarget) -> usize {
    match target {
        BuildTarget::Server => 196,
        BuildTarget::Client => 152,
    }
}

/// The r476 fact table. Target-independent facts come first, in the order
/// the engine fixture has always listed them.
pub const FACTS: &[LayoutFact<'static>] = &[
    LayoutFact::all("UintPair", UINT_PAIR),
    LayoutFact::all("Uint16Pair", UINT16_PAIR),
    LayoutFact::all("string", STRING),
    LayoutFact::all("ScriptString", SCRIPT_STRING),
    LayoutFact::all("ScriptArray", SCRIPT_ARRAY),
    LayoutFact::all("IntVec", INT_VEC),
    LayoutFact::all("CrVec", CR_VEC),
    LayoutFact::all("IntSet", INT_SET),
    LayoutFact::all("CrMap", CR_MAP),
    LayoutFact::all("Critter", CRITTER),
    LayoutFact::all("GameOptions", GAME_OPTIONS),
    LayoutFact::only(BuildTarget::Server, "Item", item(BuildTarget::Server)),
    LayoutFact::only(BuildTarget::Client, "Item", item(BuildTarget::Client)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::facts_for;

    #[test]
    fn exactly_one_item_fact_per_target() {
        for target in BuildTarget::ALL {
            let items: Vec<_> = facts_for(FACTS, target)
                .filter(|f| f.type_name == "Item")
                .collect();
            assert_eq!(items.len(), 1, "{target}");
            assert_eq!(items[0].size, item(target));
        }
    }

    #[test]
    fn toggling_target_switches_item_size() {
        let size = |t| facts_for(FACTS, t).find(|f| f.type_name == "Item").map(|f| f.size);
        assert_eq!(size(BuildTarget::Server), Some(196));
        assert_eq!(size(BuildTarget::Client), Some(152));
    }

    #[test]
    fn shared_facts_apply_to_both_targets() {
        let server = facts_for(FACTS, BuildTarget::Server).count();
        let client = facts_for(FACTS, BuildTarget::Client).count();
        assert_eq!(server, 12);
        assert_eq!(client, 12);
    }

    #[test]
    fn no_type_is_listed_twice_for_a_target() {
        for target in BuildTarget::ALL {
            let mut names: Vec<_> = facts_for(FACTS, target).map(|f| f.type_name).collect();
            let before = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), before);
        }
    }
}
