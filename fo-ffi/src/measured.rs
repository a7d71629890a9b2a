// Sizes of the compiled mirrors, keyed by engine type name.

use std::mem::size_of;

use fo_layout_facts::{BuildTarget, MeasuredLayout};

use crate::angelscript::{ScriptArray, ScriptString};
use crate::critter::{CrMap, CrVec, Critter};
use crate::game_options::GameOptions;
use crate::item::item_size;
use crate::stl::{IntSet, IntVec, StdString, Uint16Pair, UintPair};

macro_rules! measure {
    ($($name:literal => $ty:ty),* $(,)?) => {
        [$(MeasuredLayout { type_name: $name, size: size_of::<$ty>() }),*]
    };
}

/// Every mirror named in the r476 fact table, as compiled for `target`.
pub fn measured_layouts(target: BuildTarget) -> Vec<MeasuredLayout<'static>> {
    let mut out = measure![
        "UintPair" => UintPair,
        "Uint16Pair" => Uint16Pair,
        "string" => StdString,
        "ScriptString" => ScriptString,
        "ScriptArray" => ScriptArray,
        "IntVec" => IntVec,
        "CrVec" => CrVec,
        "IntSet" => IntSet,
        "CrMap" => CrMap,
        "Critter" => Critter,
        "GameOptions" => GameOptions,
    ]
    .to_vec();
    out.push(MeasuredLayout { type_name: "Item", size: item_size(target) });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fo_layout_facts::{check, r476, LayoutError};

    #[test]
    fn mirrors_satisfy_r476_on_both_targets() {
        for target in BuildTarget::ALL {
            let report = check(r476::FACTS, &measured_layouts(target), target).unwrap();
            assert_eq!(report.checked, 12);
        }
    }

    #[test]
    fn item_measurement_follows_target() {
        let item = |t| {
            measured_layouts(t)
                .into_iter()
                .find(|m| m.type_name == "Item")
                .map(|m| m.size)
        };
        assert_eq!(item(BuildTarget::Server), Some(196));
        assert_eq!(item(BuildTarget::Client), Some(152));
    }

    #[test]
    fn server_item_against_client_facts_is_attributed() {
        let mut measured = measured_layouts(BuildTarget::Client);
        measured.last_mut().unwrap().size = item_size(BuildTarget::Server);
        let Err(LayoutError::Mismatch(list)) = check(r476::FACTS, &measured, BuildTarget::Client)
        else {
            panic!("expected a mismatch");
        };
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].type_name, "Item");
        assert_eq!(list[0].expected, 152);
        assert_eq!(list[0].actual, 196);
    }
}
